use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{LoginSummary, WordEntry};
use crate::routes::extract::{loose_int, text, ApiJson};
use crate::routes::UsernameRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TakeMoreWordRequest {
    pub username: Option<Value>,
    pub n: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct MoreWordsResponse {
    pub today_word: Vec<WordEntry>,
}

/// Log a user in
///
/// Records the login and returns the user's settings, today's pending words
/// and the streak signal (`-2` first login, `-1` already done today, `0`
/// broken, otherwise the streak carried over from yesterday).
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UsernameRequest>,
) -> Result<(StatusCode, Json<LoginSummary>)> {
    let username = text(&payload.username).ok_or(AppError::UserNotFound)?;

    let summary = state.service.login(username).await?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// Hand out more pending words when today's batch ran out
pub async fn take_more_word(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TakeMoreWordRequest>,
) -> Result<Json<MoreWordsResponse>> {
    let username = text(&payload.username).ok_or(AppError::UserNotFound)?;

    let today_word = state
        .service
        .take_more_words(username, loose_int(&payload.n))
        .await?;

    Ok(Json(MoreWordsResponse { today_word }))
}
