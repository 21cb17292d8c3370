//! sed-style `s/pattern/replacement/[flags/]` commands.
//!
//! Parsing is split into small pure steps:
//! - [`split`]: delimiter-aware field splitting
//! - [`validate`]: field count and pattern sanity checks
//! - [`engine`]: regex compilation and global replacement
//!
//! [`Command::parse`] chains them for a full command line.

pub mod engine;
pub mod split;
pub mod validate;

pub use engine::substitute;
pub use split::split_fields;
pub use validate::validate;

use std::borrow::Cow;

use crate::error::SedError;

/// Whether `c` may separate the fields of a command.
///
/// Backslash is the escape character and letters or digits would be
/// ambiguous, so neither is allowed.
#[inline]
pub fn is_valid_delimiter(c: char) -> bool {
    c != '\\' && !c.is_ascii_alphanumeric()
}

/// Replace every `\<delimiter>` in `field` with `literal`.
///
/// Other escapes are left as they are.
fn unescape_delimiter<'a>(field: &'a str, delimiter: char, literal: &str) -> Cow<'a, str> {
    let escaped = String::from_iter(['\\', delimiter]);
    if !field.contains(escaped.as_str()) {
        return Cow::Borrowed(field);
    }

    let mut out = String::with_capacity(field.len() + literal.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == delimiter => out.push_str(literal),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// A parsed substitution command, borrowing from the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub delimiter: char,
    /// Regex source, with escaped delimiters already made literal.
    pub pattern: Cow<'a, str>,
    /// Replacement template, with escaped delimiters already made literal.
    pub replacement: Cow<'a, str>,
    /// Flag characters, empty when the command has none.
    pub flags: &'a str,
}

impl<'a> Command<'a> {
    /// Parse a full command line such as `s/foo/bar/` or `S|a|b|i|`.
    pub fn parse(line: &'a str) -> Result<Self, SedError> {
        let mut chars = line.chars();
        if !matches!(chars.next(), Some('s' | 'S')) {
            return Err(SedError::NotACommand);
        }
        let delimiter = chars.next().ok_or(SedError::NotACommand)?;
        if !is_valid_delimiter(delimiter) {
            return Err(SedError::InvalidDelimiter(delimiter));
        }

        let rest = &line[1 + delimiter.len_utf8()..];
        let body = rest
            .strip_suffix(delimiter)
            .ok_or(SedError::MissingTrailingDelimiter)?;

        let fields = split_fields(body, delimiter);
        validate(&fields)?;

        let mut buf = [0u8; 4];
        let delim: &str = delimiter.encode_utf8(&mut buf);
        let replacement_literal = if delimiter == '$' { "$$" } else { delim };

        Ok(Self {
            delimiter,
            pattern: unescape_delimiter(fields[0], delimiter, &regex::escape(delim)),
            replacement: unescape_delimiter(fields[1], delimiter, replacement_literal),
            flags: fields.get(2).copied().unwrap_or(""),
        })
    }

    /// Run the substitution against `subject`.
    pub fn apply(&self, subject: &str) -> Result<String, SedError> {
        substitute(&self.pattern, &self.replacement, self.flags, subject)
    }
}
