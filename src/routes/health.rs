use axum::{extract::State, Json};

use crate::error::Result;
use crate::routes::MessageResponse;
use crate::AppState;

/// Server and schema readiness check
///
/// Called by the client at startup. Answers 503 when any of the users,
/// assignments or login_records tables is missing.
pub async fn check_server_and_db(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    state.service.check_readiness().await?;

    Ok(Json(MessageResponse::new("OK")))
}
