//! Unified error handling for minised.
//!
//! Three layers, each with its own enum:
//! - [`SedError`]: a substitution command was rejected (always silent to the channel)
//! - [`ProtocolError`]: a line could not be framed or parsed
//! - [`SessionError`]: the IRC session ended abnormally

use thiserror::Error;

// ============================================================================
// Substitution Errors (command processing)
// ============================================================================

/// Reasons a substitution command produces no output.
///
/// None of these are reported to the channel. Callers log them at debug
/// level and move on.
#[derive(Debug, Error)]
pub enum SedError {
    #[error("line is not a substitution command")]
    NotACommand,

    #[error("invalid delimiter {0:?}")]
    InvalidDelimiter(char),

    #[error("missing trailing delimiter")]
    MissingTrailingDelimiter,

    #[error("expected 2 or 3 fields, got {0}")]
    FieldCount(usize),

    #[error("pattern has no alphanumeric character")]
    DegeneratePattern,

    #[error("unsupported flag {0:?}")]
    UnsupportedFlag(char),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("no previous line on this channel")]
    NoPriorLine,

    #[error("result is {len} bytes, limit is {limit}")]
    ResultTooLong { len: usize, limit: usize },
}

impl SedError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotACommand => "not_a_command",
            Self::InvalidDelimiter(_) => "invalid_delimiter",
            Self::MissingTrailingDelimiter => "missing_trailing_delimiter",
            Self::FieldCount(_) => "field_count",
            Self::DegeneratePattern => "degenerate_pattern",
            Self::UnsupportedFlag(_) => "unsupported_flag",
            Self::Regex(_) => "regex",
            Self::NoPriorLine => "no_prior_line",
            Self::ResultTooLong { .. } => "result_too_long",
        }
    }

    /// Whether the command itself was malformed, as opposed to failing
    /// against the regex engine or the channel state.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::NotACommand
                | Self::InvalidDelimiter(_)
                | Self::MissingTrailingDelimiter
                | Self::FieldCount(_)
                | Self::DegeneratePattern
        )
    }
}

// ============================================================================
// Protocol Errors (line framing and parsing)
// ============================================================================

/// Errors raised while framing or parsing IRC lines.
///
/// Oversized lines are dropped by the codec and never surface here.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed line: {0:?}")]
    Malformed(String),
}

// ============================================================================
// Session Errors (connection lifecycle)
// ============================================================================

/// Reasons an IRC session ended.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("registration timed out after {0}s")]
    RegistrationTimeout(u64),

    #[error("connection closed during registration")]
    ClosedDuringRegistration,

    #[error("server error: {0}")]
    Server(String),
}

impl SessionError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "connect",
            Self::Protocol(_) => "protocol",
            Self::RegistrationTimeout(_) => "registration_timeout",
            Self::ClosedDuringRegistration => "closed_during_registration",
            Self::Server(_) => "server_error",
        }
    }
}
