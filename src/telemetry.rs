//! Tracing setup and span constructors.

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Build the filter: `RUST_LOG` wins over the configured directives.
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    match config.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span covering one connection to the server.
    pub fn session(address: &str, nick: &str) -> Span {
        info_span!("session", address = %address, nick = %nick)
    }

    /// Span covering the handling of one channel line.
    pub fn channel(channel: &str, speaker: &str) -> Span {
        info_span!("channel", channel = %channel, speaker = %speaker)
    }
}
