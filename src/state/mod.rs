//! State management module.
//!
//! Contains the per-channel last line store used by the substitution module.

mod channel;

pub use channel::ChannelState;
