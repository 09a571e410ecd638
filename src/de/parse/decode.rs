use std::borrow::Cow;

use crate::utils::ESCAPE_CHARACTER;

/// Decodes the escape sequences of a key or value:
/// - `$0` becomes `:`
/// - `$1` becomes `,`
/// - `$2` becomes `$`
///
/// Any other `$` is kept as it is, so hand-edited text that was never
/// escaped still reads back.
///
/// Avoids allocations when no `$` is present.
pub fn unescape(input: &str) -> Cow<'_, str> {
    if !input.contains(ESCAPE_CHARACTER) {
        return Cow::Borrowed(input);
    }

    let mut decoded = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE_CHARACTER {
            decoded.push(c);
            continue;
        }
        // look at the next character without consuming it, so that an
        // unknown sequence keeps both characters
        match chars.clone().next() {
            Some('0') => decoded.push(':'),
            Some('1') => decoded.push(','),
            Some('2') => decoded.push('$'),
            _ => {
                decoded.push(c);
                continue;
            }
        }
        chars.next();
    }
    Cow::Owned(decoded)
}
