//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{
    default_help_command, default_log_filter, default_module_name, default_realname,
    default_reconnect_delay, default_registration_timeout,
};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Upstream IRC server and identity.
    pub server: ServerConfig,
    /// Substitution module settings.
    #[serde(default)]
    pub minised: ModuleConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Connection and identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server address as `host:port` (e.g., "irc.libera.chat:6667").
    pub address: String,
    /// Nickname to register with.
    pub nick: String,
    /// Username for USER; defaults to the nickname.
    #[serde(default)]
    pub username: Option<String>,
    /// Real name for USER.
    #[serde(default = "default_realname")]
    pub realname: String,
    /// Connection password sent with PASS (optional).
    #[serde(default)]
    pub password: Option<String>,
    /// Channels joined after registration.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Seconds allowed for the registration handshake (default: 60).
    #[serde(default = "default_registration_timeout")]
    pub registration_timeout_secs: u64,
    /// Seconds to wait before reconnecting after a lost session (default: 10).
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_secs: u64,
}

impl ServerConfig {
    /// Username sent with USER.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.nick)
    }
}

/// Substitution module settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    /// Command word that requests help (default: "!help").
    #[serde(default = "default_help_command")]
    pub help_command: String,
    /// Topic answered by the help command, matched case-insensitively
    /// (default: "MiniSed").
    #[serde(default = "default_module_name")]
    pub module_name: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            help_command: default_help_command(),
            module_name: default_module_name(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}
