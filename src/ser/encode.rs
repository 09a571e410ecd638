use std::borrow::Cow;

use crate::utils::{ESCAPE_CHARACTER, KEY_VALUE_SEPARATOR, PARAM_SEPARATOR};

/// Escapes the reserved characters of a key or value:
/// - `$` becomes `$2`
/// - `,` becomes `$1`
/// - `:` becomes `$0`
///
/// Brackets are left alone; they are structure, not text.
///
/// Avoids allocations when nothing needs escaping.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains([ESCAPE_CHARACTER, PARAM_SEPARATOR, KEY_VALUE_SEPARATOR]) {
        return Cow::Borrowed(input);
    }

    // most inputs contain one or two reserved characters
    let mut encoded = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        match c {
            ESCAPE_CHARACTER => encoded.push_str("$2"),
            PARAM_SEPARATOR => encoded.push_str("$1"),
            KEY_VALUE_SEPARATOR => encoded.push_str("$0"),
            _ => encoded.push(c),
        }
    }
    Cow::Owned(encoded)
}
