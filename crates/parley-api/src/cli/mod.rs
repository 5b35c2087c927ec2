//! CLI command definitions for the `parley` binary.
//!
//! Uses clap derive macros for argument parsing. Relay settings are global
//! flags so they apply to every subcommand (e.g. `parley config --port 9000`
//! shows what `parley serve --port 9000` would run with).

pub mod config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use parley_types::config::ConfigOverrides;

/// Relay chat messages to a text-generation service.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to config.toml (defaults to ~/.parley/config.toml).
    #[arg(long, global = true, env = "PARLEY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub relay: RelayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Relay settings that override config.toml.
#[derive(Args, Debug, Default)]
pub struct RelayArgs {
    /// Upstream generation service endpoint.
    #[arg(long, global = true, env = "PARLEY_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Maximum number of history entries to keep.
    #[arg(long, global = true, env = "PARLEY_MAX_HISTORY")]
    pub max_history: Option<usize>,

    /// Browser origin allowed by CORS.
    #[arg(long, global = true, env = "PARLEY_ALLOWED_ORIGIN")]
    pub allowed_origin: Option<String>,

    /// Upstream call timeout in seconds.
    #[arg(long, global = true, env = "PARLEY_UPSTREAM_TIMEOUT")]
    pub upstream_timeout: Option<u64>,

    /// Host to bind to.
    #[arg(long, global = true, env = "PARLEY_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, global = true, env = "PARLEY_PORT")]
    pub port: Option<u16>,
}

impl RelayArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            upstream_url: self.upstream_url.clone(),
            max_history_size: self.max_history,
            allowed_origin: self.allowed_origin.clone(),
            upstream_timeout_secs: self.upstream_timeout,
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay HTTP server.
    Serve,

    /// Print the effective configuration.
    Config,
}
