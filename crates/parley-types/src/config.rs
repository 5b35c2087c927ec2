//! Relay configuration types.
//!
//! `RelayConfig` represents the `config.toml` that controls where chat
//! messages are forwarded, how much history is retained, and which browser
//! origin may call the API.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for the relay.
///
/// Loaded from `~/.parley/config.toml`. All fields have sensible defaults, and
/// each one can be overridden from the environment or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Endpoint of the upstream generation service.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Maximum number of entries kept in the conversation history.
    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,

    /// The single browser origin allowed by CORS.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Upper bound on one upstream call, in seconds.
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_upstream_url() -> String {
    "http://localhost:5001/chat".to_string()
}

fn default_max_history_size() -> usize {
    20
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            max_history_size: default_max_history_size(),
            allowed_origin: default_allowed_origin(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Values supplied from the environment or command line.
///
/// `None` leaves the corresponding `RelayConfig` field untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub upstream_url: Option<String>,
    pub max_history_size: Option<usize>,
    pub allowed_origin: Option<String>,
    pub upstream_timeout_secs: Option<u64>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl RelayConfig {
    /// Layer overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.upstream_url {
            self.upstream_url = url;
        }
        if let Some(size) = overrides.max_history_size {
            self.max_history_size = size;
        }
        if let Some(origin) = overrides.allowed_origin {
            self.allowed_origin = origin;
        }
        if let Some(secs) = overrides.upstream_timeout_secs {
            self.upstream_timeout_secs = secs;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        self
    }

    /// Reject values the relay cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "upstream_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.allowed_origin.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "allowed_origin",
                reason: "must not be empty".to_string(),
            });
        }
        // Same character set an HTTP header value accepts
        if self
            .allowed_origin
            .chars()
            .any(|c| (c < ' ' && c != '\t') || c == '\u{7f}')
        {
            return Err(ConfigError::Invalid {
                field: "allowed_origin",
                reason: "contains characters not allowed in an HTTP header".to_string(),
            });
        }
        if self.max_history_size == 0 {
            return Err(ConfigError::Invalid {
                field: "max_history_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.upstream_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "upstream_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
