//! Messages the bot sends.

use std::fmt;

use super::MAX_IRC_LINE_LEN;

/// An outbound IRC command.
///
/// `Display` renders the wire form without the trailing CRLF; the codec adds
/// it after sanitising.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Pass(String),
    Nick(String),
    User { username: String, realname: String },
    Join(String),
    Privmsg { target: String, text: String },
    Pong(String),
    Quit(Option<String>),
}

impl Outgoing {
    pub fn privmsg(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Privmsg {
            target: target.into(),
            text: text.into(),
        }
    }

    /// Longest PRIVMSG text to `target` that fits one line, CRLF included.
    pub fn privmsg_text_limit(target: &str) -> usize {
        MAX_IRC_LINE_LEN.saturating_sub("PRIVMSG  :\r\n".len() + target.len())
    }
}

impl fmt::Display for Outgoing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(password) => write!(f, "PASS {password}"),
            Self::Nick(nick) => write!(f, "NICK {nick}"),
            Self::User { username, realname } => write!(f, "USER {username} 0 * :{realname}"),
            Self::Join(channel) => write!(f, "JOIN {channel}"),
            Self::Privmsg { target, text } => write!(f, "PRIVMSG {target} :{text}"),
            Self::Pong(token) => write!(f, "PONG :{token}"),
            Self::Quit(Some(reason)) => write!(f, "QUIT :{reason}"),
            Self::Quit(None) => f.write_str("QUIT"),
        }
    }
}
