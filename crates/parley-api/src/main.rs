//! Parley CLI and REST API entry point.
//!
//! Binary name: `parley`
//!
//! Parses CLI arguments, layers configuration (defaults, config.toml,
//! environment, flags), then either prints the effective configuration or
//! starts the relay server.

mod cli;
mod http;
mod state;

use clap::Parser;

use cli::{Cli, Commands};
use parley_infra::config::{load_relay_config, resolve_config_path};
use parley_observe::tracing_setup::{init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,parley=info",
        1 => "info,parley=debug,tower_http=debug",
        _ => "trace",
    };
    init_tracing(filter, cli.otel).map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))?;

    let config_path = resolve_config_path(cli.config.as_deref());
    let config = load_relay_config(&config_path)
        .await
        .with_overrides(cli.relay.overrides());
    config.validate()?;

    let result = match cli.command {
        Commands::Config => cli::config::show_config(&config, &config_path, cli.json),
        Commands::Serve => serve(AppState::new(config)?, cli.quiet).await,
    };

    shutdown_tracing();
    result
}

/// Bind the listener and run the relay until Ctrl+C or SIGTERM.
async fn serve(state: AppState, quiet: bool) -> anyhow::Result<()> {
    let addr = state.config.bind_addr();
    let upstream_url = state.config.upstream_url.clone();
    let router = http::router::build_router(state)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !quiet {
        println!(
            "  {} Parley relay listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!(
            "  {} {}",
            console::style("→").dim(),
            console::style(&upstream_url).dim()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
