//! minised - sed-style corrections for IRC channels.
//!
//! Someone says `Hello foo!`, someone else follows up with `s/foo/baz/`, and
//! the bot answers `Hello baz!`. The rewritten line becomes the channel's new
//! last line, so corrections chain.
//!
//! - [`sed`]: command parsing and the substitution engine
//! - [`state`]: last line per channel
//! - [`dispatch`]: event kinds and routing predicates
//! - [`module`]: the entry points and the [`MiniSed`] module
//! - [`irc`], [`network`]: the client connection hosting the module

pub mod config;
pub mod dispatch;
pub mod error;
pub mod irc;
pub mod module;
pub mod network;
pub mod sed;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use dispatch::Event;
pub use error::{ProtocolError, SedError, SessionError};
pub use module::{Handled, MessageSink, MiniSed, on_any_line, on_candidate_line};
pub use state::ChannelState;
