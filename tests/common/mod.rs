//! Integration test common infrastructure.
//!
//! Provides a scripted fake IRC server and config builders for driving the
//! bot end to end.

pub mod server;

#[allow(unused_imports)]
pub use server::{FakeConnection, FakeServer};

use minised::Config;

/// Config pointing at `address` with fast timeouts.
#[allow(dead_code)]
pub fn test_config(address: &str, channels: &[&str]) -> Config {
    let channels = channels
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let toml = format!(
        r#"
[server]
address = "{address}"
nick = "minised"
channels = [{channels}]
registration_timeout_secs = 2
reconnect_delay_secs = 1
"#
    );
    toml::from_str(&toml).expect("test config should parse")
}
