//! Last line seen on each channel.

use std::collections::HashMap;

/// Mapping from channel name to the most recent line on that channel.
///
/// An entry appears the first time a line is recorded and is overwritten on
/// every later line or successful substitution. Entries are only ever removed
/// all at once by [`ChannelState::clear`].
#[derive(Debug, Default, Clone)]
pub struct ChannelState {
    lines: HashMap<String, String>,
}

impl ChannelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last line recorded for `channel`, if any.
    pub fn last_line(&self, channel: &str) -> Option<&str> {
        self.lines.get(channel).map(String::as_str)
    }

    /// Store `text` as the last line of `channel`, returning the previous one.
    pub fn record(&mut self, channel: &str, text: impl Into<String>) -> Option<String> {
        let text = text.into();
        if let Some(slot) = self.lines.get_mut(channel) {
            return Some(std::mem::replace(slot, text));
        }
        self.lines.insert(channel.to_string(), text);
        None
    }

    /// Forget every channel.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of channels with a recorded line.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
