//! Image Upload Module
//!
//! Raw-body image uploads, accepted only when the leading bytes match a
//! known image signature (see `shared::image`).

pub mod handlers;

pub use handlers::upload_image;
