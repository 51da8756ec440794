//! Chat HTTP Handlers
//!
//! - `POST /api/chat` appends one record to today's conversation document
//! - `GET /api/chat?a=&b=&date=` reads one conversation day

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::store::MessageStore;
use crate::shared::messaging::{
    conversation_key, daily_file_name, AppendMessageResponse, ChatItem, ConversationDayQuery,
    ConversationDayResponse,
};

/// Append a message and return the whole day so far
pub async fn append_message(
    State(store): State<MessageStore>,
    payload: Result<Json<ChatItem>, JsonRejection>,
) -> Result<Json<AppendMessageResponse>, BackendError> {
    let Json(item) = payload?;
    let today = Utc::now().date_naive();

    let outcome = store.append(item, today).await?;

    Ok(Json(AppendMessageResponse {
        status: "ok".to_string(),
        folder: outcome.folder,
        file: outcome.file,
        messages: outcome.document.items,
    }))
}

/// Read one day of a conversation; the date defaults to today (UTC)
pub async fn read_conversation_day(
    State(store): State<MessageStore>,
    query: Result<Query<ConversationDayQuery>, QueryRejection>,
) -> Result<Json<ConversationDayResponse>, BackendError> {
    let Query(query) = query?;
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let document = store
        .read_day(&query.a, &query.b, date)
        .await?
        .ok_or_else(|| BackendError::handler(StatusCode::NOT_FOUND, "No messages for this day"))?;

    Ok(Json(ConversationDayResponse {
        folder: conversation_key(&query.a, &query.b),
        file: daily_file_name(date),
        date: document.date,
        messages: document.items,
    }))
}
