use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::routes::extract::{loose_int, text, ApiJson};
use crate::routes::{MessageResponse, UsernameRequest};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: Option<Value>,
    pub language: Option<Value>,
    pub dayword: Option<Value>,
    pub category: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub message: bool,
}

/// Register a new user
///
/// Fields are checked in order (username, language, dayword, category) and the
/// first failure is reported. A table category must exist; its words are
/// copied into the user's queue in random order together with the user row.
pub async fn sign_up(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignUpRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let new_user = NewUser::validate(
        text(&payload.username),
        text(&payload.language),
        loose_int(&payload.dayword),
        text(&payload.category),
    )?;

    state.service.sign_up(new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Sign up successfully!")),
    ))
}

/// Tell the deletion flow whether the account exists
pub async fn check_user_before_delete(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UsernameRequest>,
) -> Result<Json<ExistsResponse>> {
    let exists = match text(&payload.username) {
        Some(username) => state.service.check_user_before_delete(username).await?,
        None => false,
    };

    Ok(Json(ExistsResponse { message: exists }))
}

/// Delete a user and their word queue
///
/// # Note
/// Login history is kept unless `DELETE_LOGIN_RECORDS` is enabled.
pub async fn delete_account(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UsernameRequest>,
) -> Result<Json<MessageResponse>> {
    let username = text(&payload.username).ok_or(AppError::UserNotFound)?;

    state.service.delete_account(username).await?;

    Ok(Json(MessageResponse::new("Deleted account")))
}
