//! Minimal IRC client protocol support.
//!
//! - [`parse`]: nom parser turning raw lines into [`IrcLine`]
//! - [`outgoing`]: the commands the bot sends
//! - [`codec`]: tokio codec framing both directions

pub mod codec;
pub mod outgoing;
pub mod parse;

pub use codec::{IrcCodec, MAX_IRC_LINE_LEN};
pub use outgoing::Outgoing;
pub use parse::IrcLine;

/// Whether `target` names a channel rather than a user.
#[inline]
pub fn is_channel_name(target: &str) -> bool {
    target.starts_with(['#', '&', '+', '!'])
}
