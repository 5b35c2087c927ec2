//! Application state wiring the relay together.
//!
//! AppState holds the concrete relay used by the REST API. `MessageRelay` is
//! generic over the upstream client; AppState pins it to the reqwest
//! implementation from parley-infra.

use std::sync::Arc;

use parley_core::history::store::HistoryStore;
use parley_core::relay::service::MessageRelay;
use parley_infra::upstream::HttpGenerationClient;
use parley_types::config::RelayConfig;

/// Concrete relay type pinned to the HTTP upstream client.
pub type ConcreteRelay = MessageRelay<HttpGenerationClient>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ConcreteRelay>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    /// Build the upstream client and an empty history from `config`.
    pub fn new(config: RelayConfig) -> anyhow::Result<Self> {
        let client = HttpGenerationClient::from_config(&config)?;
        let history = HistoryStore::new(config.max_history_size);

        tracing::info!(
            upstream = %config.upstream_url,
            max_history = config.max_history_size,
            timeout_secs = config.upstream_timeout_secs,
            "Relay initialized"
        );

        Ok(Self {
            relay: Arc::new(MessageRelay::new(client, history)),
            config: Arc::new(config),
        })
    }
}
