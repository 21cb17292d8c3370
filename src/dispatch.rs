//! Event kinds and the predicates that route them.
//!
//! Inbound IRC lines are classified once into an [`Event`]. The module then
//! asks small pure predicates whether a channel line should reach the
//! substitution handler; every channel line reaches the line recorder.

use crate::irc::{IrcLine, is_channel_name};
use crate::sed::is_valid_delimiter;

/// CTCP payloads (ACTION, VERSION, ...) are wrapped in this byte.
const CTCP_DELIM: char = '\x01';

/// What an inbound line means to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Plain text said on a channel.
    ChannelText {
        channel: String,
        speaker: String,
        text: String,
    },
    /// Plain text sent directly to the bot.
    PrivateText { speaker: String, text: String },
    Ping(String),
    /// RPL_WELCOME (001): registration finished.
    Welcome,
    /// ERR_NICKNAMEINUSE (433).
    NickInUse,
    /// The server is closing the link.
    ServerError(String),
    Other,
}

impl Event {
    pub fn from_line(line: &IrcLine) -> Self {
        match line.command.as_str() {
            "PRIVMSG" => {
                let (Some(target), Some(text)) = (line.param(0), line.param(1)) else {
                    return Self::Other;
                };
                if text.starts_with(CTCP_DELIM) {
                    return Self::Other;
                }
                let speaker = line.nick().unwrap_or_default().to_string();
                if is_channel_name(target) {
                    Self::ChannelText {
                        channel: target.to_string(),
                        speaker,
                        text: text.to_string(),
                    }
                } else {
                    Self::PrivateText {
                        speaker,
                        text: text.to_string(),
                    }
                }
            }
            "PING" => Self::Ping(line.param(0).unwrap_or_default().to_string()),
            "001" => Self::Welcome,
            "433" => Self::NickInUse,
            "ERROR" => Self::ServerError(line.param(0).unwrap_or_default().to_string()),
            _ => Self::Other,
        }
    }

    /// The text of a channel or private message.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::ChannelText { text, .. } | Self::PrivateText { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Whether `event` is text said on a channel.
#[inline]
pub fn is_channel_text(event: &Event) -> bool {
    matches!(event, Event::ChannelText { .. })
}

/// Cheap pre-selection of substitution commands.
///
/// Equivalent to `^[sS](X).*\1.*\1$` where `X` is any character other than
/// a backslash or an ASCII letter or digit: the delimiter must appear at
/// least twice more after the opening one, the last time at the very end.
/// `.` does not cross line breaks, so text containing one never matches.
pub fn is_substitution_shape(text: &str) -> bool {
    let mut chars = text.chars();
    if !matches!(chars.next(), Some('s' | 'S')) {
        return false;
    }
    let Some(delimiter) = chars.next() else {
        return false;
    };
    if !is_valid_delimiter(delimiter) {
        return false;
    }

    let rest = chars.as_str();
    if rest.contains('\n') {
        return false;
    }
    rest.ends_with(delimiter) && rest.matches(delimiter).count() >= 2
}

/// Whether `event` should be offered to the substitution handler.
pub fn wants_substitution(event: &Event) -> bool {
    is_channel_text(event) && event.text().is_some_and(is_substitution_shape)
}
