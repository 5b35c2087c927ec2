//! The result of a single chat turn.
//!
//! A chat turn never fails with an `Err`: every path ends in one of the
//! [`ChatOutcome`] variants, and the API layer maps each one onto an HTTP
//! status and a `{"response": ...}` body.

/// Caller-visible text returned when the message is missing or blank.
pub const EMPTY_MESSAGE_RESPONSE: &str = "Message cannot be empty.";

/// Text recorded in history and returned when the upstream call fails.
pub const UPSTREAM_FAILURE_RESPONSE: &str = "Error connecting to AI service.";

/// Outcome of `MessageRelay::handle_chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The upstream service produced a reply.
    Success { reply: String },
    /// The message was absent or blank. History was not touched.
    ValidationError,
    /// The upstream service could not be reached or returned garbage.
    UpstreamFailure { reply: String },
}

impl ChatOutcome {
    pub fn upstream_failure() -> Self {
        ChatOutcome::UpstreamFailure {
            reply: UPSTREAM_FAILURE_RESPONSE.to_string(),
        }
    }

    /// The text that goes into the `response` field of the HTTP body.
    pub fn response_text(&self) -> &str {
        match self {
            ChatOutcome::Success { reply } => reply,
            ChatOutcome::ValidationError => EMPTY_MESSAGE_RESPONSE,
            ChatOutcome::UpstreamFailure { reply } => reply,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChatOutcome::Success { .. })
    }
}
