//! Conversation history HTTP handler.
//!
//! Endpoint:
//! - GET /api/history - Current history, oldest first

use axum::Json;
use axum::extract::State;

use parley_types::entry::ChatEntry;

use crate::state::AppState;

/// GET /api/history - Snapshot of the conversation log.
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<ChatEntry>> {
    Json(state.relay.handle_history())
}
