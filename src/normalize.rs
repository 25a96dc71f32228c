//! Underscore normalization of raw modifier tokens.
//!
//! Class names cannot carry spaces, so arbitrary values spell them as `_`.
//! A literal underscore survives when escaped as `\_`.

use std::borrow::Cow;

/// Replaces `_` with a space and unescapes `\_` into a literal `_`.
///
/// Values without any underscore are returned borrowed.
pub fn normalize(value: &str) -> Cow<'_, str> {
    if !value.contains('_') {
        return Cow::Borrowed(value);
    }
    let mut normalized = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'_') => {
                chars.next();
                normalized.push('_');
            }
            '_' => normalized.push(' '),
            other => normalized.push(other),
        }
    }
    Cow::Owned(normalized)
}
