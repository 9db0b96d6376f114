pub mod account;
pub mod category;
pub mod extract;
pub mod health;
pub mod session;

pub use account::{check_user_before_delete, delete_account, sign_up};
pub use category::{create_word_category, take_category};
pub use health::check_server_and_db;
pub use session::{login, take_more_word};

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::INSTANCE_ERROR;
use crate::AppState;

/// Body shared by every endpoint that only needs a username
#[derive(Debug, Deserialize)]
pub struct UsernameRequest {
    pub username: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the application router
///
/// `/server_check`, `/signup`, `/delete_username_check` and `/delaccount` are
/// the paths older clients still call.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/check_server_and_db", get(check_server_and_db))
        .route("/server_check", get(check_server_and_db))
        .route("/take_category", get(take_category))
        .route("/sign_up", post(sign_up))
        .route("/signup", post(sign_up))
        .route("/check_user_before_delete", post(check_user_before_delete))
        .route("/delete_username_check", post(check_user_before_delete))
        .route("/delete_account", delete(delete_account))
        .route("/delaccount", delete(delete_account))
        .route("/login", post(login))
        .route("/take_more_word", post(take_more_word))
        .route("/create_word_category", post(create_word_category))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": INSTANCE_ERROR })),
    )
        .into_response()
}
