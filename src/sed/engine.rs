//! Regex compilation and global replacement.

use regex::{Regex, RegexBuilder};

use crate::error::SedError;

/// Compile `pattern` with the given flag characters.
///
/// Each flag maps onto the regex crate's switch of the same letter, so
/// `i`, `m`, `s`, `U`, `x`, `u` and `R` mean exactly what they mean inside
/// `(?...)`. Anything else is rejected rather than guessed at.
pub fn compile(pattern: &str, flags: &str) -> Result<Regex, SedError> {
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'U' => builder.swap_greed(true),
            'x' => builder.ignore_whitespace(true),
            'u' => builder.unicode(true),
            'R' => builder.crlf(true),
            other => return Err(SedError::UnsupportedFlag(other)),
        };
    }
    Ok(builder.build()?)
}

/// Replace every non-overlapping match of `pattern` in `subject`.
///
/// `replacement` uses the regex crate's expansion syntax (`$1`, `${name}`,
/// `$$`) and is passed through untouched.
pub fn substitute(
    pattern: &str,
    replacement: &str,
    flags: &str,
    subject: &str,
) -> Result<String, SedError> {
    let re = compile(pattern, flags)?;
    Ok(re.replace_all(subject, replacement).into_owned())
}
