//! Chat message HTTP handler.
//!
//! Endpoint:
//! - POST /api/message - Relay one message and return the reply

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::http::response::ChatResponse;
use crate::state::AppState;

/// Request body for sending a chat message.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/message - Run one chat turn.
///
/// A body that fails to parse (not JSON, wrong content type, `message` not a
/// string) is treated the same as a missing message.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> ChatResponse {
    let message = match payload {
        Ok(Json(req)) => req.message,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable message body");
            None
        }
    };

    let outcome = state.relay.handle_chat(message.as_deref()).await;
    ChatResponse(outcome)
}
