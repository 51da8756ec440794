//! File Access Module
//!
//! Generic list, read, write and delete access to the data repository.
//! Every path is checked by the validators in `shared::files` before it
//! reaches the remote API. Listing and deleting are rate limited per client;
//! see `backend::routes::file_routes`.

pub mod handlers;

pub use handlers::{delete_file, list_files, read_file, write_file};
