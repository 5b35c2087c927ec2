//! Mapping of chat turn outcomes onto HTTP responses.
//!
//! Every chat response has the same body shape, `{"response": "<text>"}`;
//! only the status code differs:
//!
//! | outcome           | status |
//! |-------------------|--------|
//! | `Success`         | 200    |
//! | `ValidationError` | 400    |
//! | `UpstreamFailure` | 500    |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use parley_types::outcome::ChatOutcome;

/// Body of every `POST /api/message` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub response: String,
}

/// A chat turn outcome ready to be sent to the caller.
#[derive(Debug)]
pub struct ChatResponse(pub ChatOutcome);

impl ChatResponse {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ChatOutcome::Success { .. } => StatusCode::OK,
            ChatOutcome::ValidationError => StatusCode::BAD_REQUEST,
            ChatOutcome::UpstreamFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageResponse {
            response: self.0.response_text().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_outcome() {
        let ok = ChatResponse(ChatOutcome::Success {
            reply: "hi".to_string(),
        });
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(
            ChatResponse(ChatOutcome::ValidationError).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ChatResponse(ChatOutcome::upstream_failure()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = ChatResponse(ChatOutcome::ValidationError).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
