//! Cheap sanity checks on split command fields.

use crate::error::SedError;

/// Check that `fields` looks like `pattern, replacement[, flags]`.
///
/// Rules, in order:
/// 1. exactly 2 or 3 fields;
/// 2. the pattern contains at least one ASCII letter or digit, which rejects
///    empty and purely symbolic patterns such as `^^^`.
///
/// Regex syntax is not checked here; the engine reports it.
pub fn validate(fields: &[&str]) -> Result<(), SedError> {
    if !(2..=3).contains(&fields.len()) {
        return Err(SedError::FieldCount(fields.len()));
    }

    if !fields[0].chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(SedError::DegeneratePattern);
    }

    Ok(())
}
