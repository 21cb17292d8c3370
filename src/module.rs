//! The MiniSed module: sed-style corrections of the last channel line.
//!
//! ## Entry points
//!
//! - [`on_any_line`]: records every channel line as that channel's last line
//! - [`on_candidate_line`]: applies an `s/pattern/replacement/[flags/]`
//!   command to the last line, stores the result and sends it to the channel
//!
//! Both take the [`ChannelState`] explicitly. [`MiniSed`] owns one and wires
//! inbound [`Event`]s to the entry points.
//!
//! ## Ordering
//!
//! A successful substitution consumes its line: the result is already the
//! channel's last line, so the command text itself is not recorded. This lets
//! `s/foo/baz/` followed by `s/z/r/` chain. A rejected command is recorded
//! like any other line.

use tracing::{debug, info, trace};

use crate::config::ModuleConfig;
use crate::dispatch::{Event, wants_substitution};
use crate::error::SedError;
use crate::irc::Outgoing;
use crate::sed::Command;
use crate::state::ChannelState;

const HELP_TEXT: &str = "This module can be used in a channel to substitute some text \
     in the line immediately before, using sed's syntax: s/regexp/replacement/";

/// Where the module sends its messages.
pub trait MessageSink {
    fn send(&mut self, target: &str, text: &str);
}

/// An outbox flushed by the session after each event.
impl MessageSink for Vec<Outgoing> {
    fn send(&mut self, target: &str, text: &str) {
        self.push(Outgoing::privmsg(target, text));
    }
}

/// Record `text` as the last line said on `channel`. Never emits.
pub fn on_any_line(state: &mut ChannelState, channel: &str, text: &str) {
    state.record(channel, text);
}

/// Apply the substitution command `text` to the last line of `channel`.
///
/// On success the result replaces the channel's last line, is sent to the
/// channel, and is returned. An empty result is recorded but not sent. A
/// result longer than one PRIVMSG line is rejected, so the stored line is
/// always what the channel saw. Every error leaves `state` untouched and
/// sends nothing.
pub fn on_candidate_line<S: MessageSink + ?Sized>(
    state: &mut ChannelState,
    sink: &mut S,
    channel: &str,
    text: &str,
) -> Result<String, SedError> {
    let previous = state.last_line(channel).ok_or(SedError::NoPriorLine)?;
    let command = Command::parse(text)?;
    let replaced = command.apply(previous)?;

    let limit = Outgoing::privmsg_text_limit(channel);
    if replaced.len() > limit {
        return Err(SedError::ResultTooLong {
            len: replaced.len(),
            limit,
        });
    }

    state.record(channel, replaced.as_str());
    if !replaced.is_empty() {
        sink.send(channel, &replaced);
    }
    Ok(replaced)
}

/// Outcome of [`MiniSed::handle`], mostly useful to tests and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// The line was a substitution; carries the new last line.
    Substituted(String),
    /// The line was stored as the channel's last line.
    Recorded,
    /// A help request was answered.
    Help,
    /// Not for this module.
    Ignored,
}

/// The substitution module, owning its per-channel state.
#[derive(Debug)]
pub struct MiniSed {
    config: ModuleConfig,
    state: ChannelState,
}

impl MiniSed {
    /// Create the module with empty channel state.
    pub fn new(config: ModuleConfig) -> Self {
        info!(module = %config.module_name, "module loaded");
        Self {
            config,
            state: ChannelState::new(),
        }
    }

    /// Swap in new settings, keeping channel state.
    pub fn reload(&mut self, config: ModuleConfig) {
        debug!(module = %config.module_name, "module reloaded");
        self.config = config;
    }

    /// Forget every channel's last line.
    pub fn reset(&mut self) {
        debug!(channels = self.state.len(), "channel state reset");
        self.state.clear();
    }

    /// Tear the module down.
    pub fn unload(self) {
        info!(
            module = %self.config.module_name,
            channels = self.state.len(),
            "module unloaded"
        );
    }

    pub fn state(&self) -> &ChannelState {
        &self.state
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Route one inbound event.
    pub fn handle<S: MessageSink + ?Sized>(&mut self, event: &Event, sink: &mut S) -> Handled {
        match event {
            Event::ChannelText { channel, text, .. } => {
                if self.is_help_request(text) {
                    sink.send(channel, HELP_TEXT);
                    on_any_line(&mut self.state, channel, text);
                    return Handled::Help;
                }

                if wants_substitution(event) {
                    match on_candidate_line(&mut self.state, sink, channel, text) {
                        Ok(result) => {
                            debug!(channel = %channel, "substitution applied");
                            return Handled::Substituted(result);
                        }
                        Err(e) if e.is_malformed() => {
                            trace!(channel = %channel, reason = e.error_code(), "malformed command");
                        }
                        Err(e) => {
                            debug!(
                                channel = %channel,
                                reason = e.error_code(),
                                error = %e,
                                "substitution rejected"
                            );
                        }
                    }
                }

                on_any_line(&mut self.state, channel, text);
                Handled::Recorded
            }
            Event::PrivateText { speaker, text } if self.is_help_request(text) => {
                sink.send(speaker, HELP_TEXT);
                Handled::Help
            }
            _ => Handled::Ignored,
        }
    }

    /// `<help_command> <module_name>`, module name compared case-insensitively.
    fn is_help_request(&self, text: &str) -> bool {
        let mut words = text.split_whitespace();
        matches!(
            (words.next(), words.next(), words.next()),
            (Some(cmd), Some(topic), None)
                if cmd == self.config.help_command
                    && topic.eq_ignore_ascii_case(&self.config.module_name)
        )
    }
}
