//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::irc::is_channel_name;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.address is required")]
    MissingAddress,
    #[error("server.nick is required")]
    MissingNick,
    #[error("server.nick must not contain spaces, got '{0}'")]
    InvalidNick(String),
    #[error("server.channels entry is not a channel name: '{0}'")]
    InvalidChannel(String),
    #[error("minised.help_command must be a single non-empty word, got '{0}'")]
    InvalidHelpCommand(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.address.trim().is_empty() {
        errors.push(ValidationError::MissingAddress);
    }

    let nick = &config.server.nick;
    if nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    } else if nick.contains(char::is_whitespace) {
        errors.push(ValidationError::InvalidNick(nick.clone()));
    }

    for channel in &config.server.channels {
        if !is_channel_name(channel) || channel.len() < 2 || channel.contains([' ', ',']) {
            errors.push(ValidationError::InvalidChannel(channel.clone()));
        }
    }

    let help = &config.minised.help_command;
    if help.is_empty() || help.contains(char::is_whitespace) {
        errors.push(ValidationError::InvalidHelpCommand(help.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> Config {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        let config = config(
            r##"
[server]
address = "127.0.0.1:6667"
nick = "minised"
channels = ["#test"]
"##,
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_fields_fail() {
        let config = config(
            r#"
[server]
address = ""
nick = ""
"#,
        );
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::MissingAddress)));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::MissingNick)));
    }

    #[test]
    fn test_nick_with_space_fails() {
        let config = config(
            r#"
[server]
address = "127.0.0.1:6667"
nick = "mini sed"
"#,
        );
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidNick(_))));
    }

    #[test]
    fn test_bad_channels_are_all_reported() {
        let config = config(
            r##"
[server]
address = "127.0.0.1:6667"
nick = "minised"
channels = ["test", "#", "#a,#b", "#ok"]
"##,
        );
        let errors = validate(&config).unwrap_err();
        let bad: Vec<_> = errors
            .iter()
            .filter_map(|e| match e {
                ValidationError::InvalidChannel(c) => Some(c.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(bad, vec!["test", "#", "#a,#b"]);
    }

    #[test]
    fn test_help_command_must_be_one_word() {
        let config = config(
            r#"
[server]
address = "127.0.0.1:6667"
nick = "minised"

[minised]
help_command = "! help"
"#,
        );
        let errors = validate(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::InvalidHelpCommand(_)))
        );
    }
}
