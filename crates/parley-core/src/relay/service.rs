//! Message relay orchestrating a single chat turn.
//!
//! MessageRelay validates the incoming message, records it, forwards it to
//! the upstream generation service, and records whatever came back (the
//! reply, or a placeholder when the call failed). Every path produces a
//! [`ChatOutcome`]; nothing escapes as an error.

use parley_types::entry::ChatEntry;
use parley_types::outcome::{ChatOutcome, UPSTREAM_FAILURE_RESPONSE};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::history::store::HistoryStore;
use crate::relay::client::GenerationClient;

/// Runs chat turns against one upstream client and one shared history.
///
/// Generic over `GenerationClient` so the core never depends on an HTTP
/// crate.
pub struct MessageRelay<G: GenerationClient> {
    client: G,
    history: HistoryStore,
}

impl<G: GenerationClient> MessageRelay<G> {
    pub fn new(client: G, history: HistoryStore) -> Self {
        Self { client, history }
    }

    /// Access the upstream client.
    pub fn client(&self) -> &G {
        &self.client
    }

    /// Access the history store.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Run one chat turn.
    ///
    /// `raw` is `None` when the request carried no message at all. A blank
    /// message is rejected before anything is recorded or forwarded. The user
    /// entry stores the message exactly as given (untrimmed), and is appended
    /// before the upstream call starts; the reply or error entry is appended
    /// after it completes.
    pub async fn handle_chat(&self, raw: Option<&str>) -> ChatOutcome {
        let message = match raw {
            Some(m) if !is_blank(m) => m,
            _ => {
                debug!("Rejected empty chat message");
                return ChatOutcome::ValidationError;
            }
        };

        let span = info_span!("chat_turn", turn_id = %Uuid::now_v7());
        self.run_turn(message).instrument(span).await
    }

    async fn run_turn(&self, message: &str) -> ChatOutcome {
        self.history.append(ChatEntry::user(message));

        match self.client.generate(message).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "Upstream reply received");
                self.history.append(ChatEntry::ai(reply.clone()));
                ChatOutcome::Success { reply }
            }
            Err(e) => {
                warn!(error = %e, "Upstream generation failed");
                self.history.append(ChatEntry::error(UPSTREAM_FAILURE_RESPONSE));
                ChatOutcome::upstream_failure()
            }
        }
    }

    /// Current history, oldest first. Never mutates state.
    pub fn handle_history(&self) -> Vec<ChatEntry> {
        self.history.snapshot()
    }
}

/// Blank means nothing but control characters and ASCII spaces (code points
/// up to U+0020). Other Unicode whitespace such as U+00A0 counts as content.
fn is_blank(message: &str) -> bool {
    message.chars().all(|c| c <= ' ')
}
