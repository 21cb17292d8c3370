//! Delimiter-aware field splitting.

/// Split a command body into its delimiter-separated fields.
///
/// A backslash makes the following character part of the current field, so
/// `\/` never closes a field when `/` is the delimiter. Escapes are kept
/// verbatim: no de-escaping happens here. The open field is emitted when the
/// input runs out, and an empty body yields no fields at all.
///
/// The caller is expected to pass the text between the opening
/// `s<delimiter>` and the final delimiter of the command.
pub fn split_fields(body: &str, delimiter: char) -> Vec<&str> {
    let mut fields = Vec::new();
    if body.is_empty() {
        return fields;
    }

    let mut start = 0;
    let mut chars = body.char_indices();
    while let Some((idx, c)) = chars.next() {
        if c == '\\' {
            // Skip the escaped character, whatever it is.
            chars.next();
        } else if c == delimiter {
            fields.push(&body[start..idx]);
            start = idx + c.len_utf8();
        }
    }
    fields.push(&body[start..]);

    fields
}
