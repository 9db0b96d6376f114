use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::ERR_INVALID_REQUEST;
use crate::error::{AppError, Result};
use crate::routes::extract::{text, ApiJson};
use crate::routes::MessageResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub word_tables: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub table_name: Option<Value>,
    /// A missing key means no words; an explicit `null` is rejected
    #[serde(default = "no_words")]
    pub words: Value,
}

fn no_words() -> Value {
    Value::Array(Vec::new())
}

/// List the word categories a new user can choose from
pub async fn take_category(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let word_tables = state.service.list_categories().await?;

    Ok(Json(CategoriesResponse { word_tables }))
}

/// Create a word category table and append words to it
///
/// Administrative endpoint, not used by the learning client.
pub async fn create_word_category(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCategoryRequest>,
) -> Result<Json<MessageResponse>> {
    let table_name = text(&payload.table_name)
        .filter(|name| !name.is_empty())
        .ok_or(AppError::InvalidInput(ERR_INVALID_REQUEST))?;

    let words = parse_words(payload.words).ok_or(AppError::InvalidInput(ERR_INVALID_REQUEST))?;

    let name = state
        .service
        .create_word_category(table_name, &words)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "{} table ready, {} words inserted",
        name.as_str(),
        words.len()
    ))))
}

/// Anything but a list of strings is rejected
fn parse_words(words: Value) -> Option<Vec<String>> {
    match words {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(word) => Some(word),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}
