//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, ServerConfig, ModuleConfig, LogConfig)
//! - [`validation`]: Startup checks returning every problem at once
//! - `defaults`: serde default value functions

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, LogConfig, LogFormat, ModuleConfig, ServerConfig};
pub use validation::{ValidationError, validate};
