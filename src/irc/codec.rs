//! Tokio codec for IRC lines.
//!
//! Decodes newline-terminated lines into [`IrcLine`] and encodes [`Outgoing`]
//! messages. Lines are limited to 512 bytes including CRLF.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

use super::{IrcLine, Outgoing};
use crate::error::ProtocolError;

/// RFC 1459 line limit, CRLF included.
pub const MAX_IRC_LINE_LEN: usize = 512;

pub struct IrcCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    max_len: usize,
    /// Set while skipping the rest of an oversized line.
    discarding: bool,
}

impl Default for IrcCodec {
    fn default() -> Self {
        Self::with_max_len(MAX_IRC_LINE_LEN)
    }
}

impl IrcCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }

    /// Pull the next complete, non-empty line out of `src`.
    ///
    /// Oversized lines are dropped with a warning instead of failing the
    /// stream. Invalid UTF-8 is replaced lossily.
    fn next_line(&mut self, src: &mut BytesMut) -> Option<String> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if src.len() > self.max_len {
                    warn!(len = src.len(), limit = self.max_len, "discarding oversized line");
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                } else {
                    self.next_index = src.len();
                }
                return None;
            };

            let raw = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if std::mem::take(&mut self.discarding) {
                continue;
            }
            if raw.len() > self.max_len {
                warn!(len = raw.len(), limit = self.max_len, "discarding oversized line");
                continue;
            }

            let text = String::from_utf8_lossy(&raw);
            let text = text.trim_end_matches(['\r', '\n']);
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    /// Render an outgoing message as a single wire line.
    ///
    /// - Cuts at the first line break so one message never becomes two
    /// - Truncates on a char boundary to fit the line limit
    pub fn sanitize(msg: &Outgoing, max_len: usize) -> String {
        let mut line = msg.to_string();
        if let Some(pos) = line.find(['\r', '\n']) {
            line.truncate(pos);
        }

        let limit = max_len.saturating_sub(2);
        if line.len() > limit {
            let mut end = limit;
            while !line.is_char_boundary(end) {
                end -= 1;
            }
            line.truncate(end);
        }

        line.push_str("\r\n");
        line
    }
}

impl Decoder for IrcCodec {
    type Item = IrcLine;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<IrcLine>, ProtocolError> {
        while let Some(line) = self.next_line(src) {
            match line.parse::<IrcLine>() {
                Ok(msg) => return Ok(Some(msg)),
                Err(e) => warn!(error = %e, "skipping malformed line"),
            }
        }
        Ok(None)
    }
}

impl Encoder<Outgoing> for IrcCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: Outgoing, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        dst.extend_from_slice(Self::sanitize(&msg, self.max_len).as_bytes());
        Ok(())
    }
}
