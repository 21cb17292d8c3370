//! minised - IRC bot answering sed-style corrections.
//!
//! Usage: `minised [config.toml]` (default `minised.toml`).

use std::time::Duration;

use anyhow::Context;
use minised::config::{self, Config};
use minised::network::{SessionEnd, run_session};
use minised::{MiniSed, telemetry};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "minised.toml".to_string());

    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {config_path}"))?;

    telemetry::init(&config.log);

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(path = %config_path, error = %e, "Invalid config");
        }
        anyhow::bail!("{} configuration error(s) in {config_path}", errors.len());
    }

    info!(
        address = %config.server.address,
        nick = %config.server.nick,
        channels = config.server.channels.len(),
        "Starting minised"
    );

    let mut module = MiniSed::new(config.minised.clone());
    let reconnect_delay = Duration::from_secs(config.server.reconnect_delay_secs);

    loop {
        match run_session(&config, &mut module, shutdown_signal()).await {
            Ok(SessionEnd::Shutdown) => break,
            Ok(SessionEnd::Closed) => warn!("session closed"),
            Err(e) => error!(reason = e.error_code(), error = %e, "session failed"),
        }

        info!(delay_secs = reconnect_delay.as_secs(), "reconnecting");
        tokio::select! {
            _ = tokio::time::sleep(reconnect_delay) => {}
            _ = shutdown_signal() => break,
        }
    }

    module.unload();
    info!("minised stopped");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
