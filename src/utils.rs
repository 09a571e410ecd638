//! Reserved characters of the encoding and a few bracket helpers.

/// Joins a key to its value inside one pair.
pub const KEY_VALUE_SEPARATOR: char = ':';
/// Joins pairs inside a record.
pub const PARAM_SEPARATOR: char = ',';
/// Joins elements inside a bracketed list.
pub const LIST_SEPARATOR: char = '|';
/// Starts a two-character escape sequence.
pub const ESCAPE_CHARACTER: char = '$';

/// What an empty record serializes to.
///
/// Some text widgets treat an empty string as "not set", so an empty record
/// never encodes to `""`.
pub const EMPTY_PLACEHOLDER: &str = "[empty]";

/// Peels one layer of brackets off `value`, if the leading `[` is matched by
/// the trailing `]`.
///
/// `[a]b[c]` starts and ends with a bracket but is not enclosed by one pair,
/// so it yields `None`.
pub(crate) fn strip_brackets(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;
    let mut depth = 0usize;
    for b in inner.bytes() {
        match b {
            b'[' => depth += 1,
            b']' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

/// Returns the deepest bracket nesting in `value`.
///
/// On a bracket without a partner, returns the byte offset of that bracket
/// instead.
pub(crate) fn nesting_depth(value: &str) -> Result<usize, usize> {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut opened_at = 0usize;
    for (idx, b) in value.bytes().enumerate() {
        match b {
            b'[' => {
                if depth == 0 {
                    opened_at = idx;
                }
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return Err(idx),
            },
            _ => {}
        }
    }
    if depth > 0 { Err(opened_at) } else { Ok(deepest) }
}

#[cfg(test)]
mod test {
    use super::{nesting_depth, strip_brackets};

    #[test]
    fn strips_matching_pair_only() {
        assert_eq!(strip_brackets("[1|2]"), Some("1|2"));
        assert_eq!(strip_brackets("[]"), Some(""));
        assert_eq!(strip_brackets("[[empty]]"), Some("[empty]"));
        assert_eq!(strip_brackets("[a]b[c]"), None);
        assert_eq!(strip_brackets("[a[b]"), None);
        assert_eq!(strip_brackets("["), None);
        assert_eq!(strip_brackets("plain"), None);
    }

    #[test]
    fn measures_depth() {
        assert_eq!(nesting_depth("plain"), Ok(0));
        assert_eq!(nesting_depth("[1|2]"), Ok(1));
        assert_eq!(nesting_depth("[a:[1|2],b:[x]]"), Ok(2));
        assert_eq!(nesting_depth("ab]"), Err(2));
        assert_eq!(nesting_depth("x[[y]"), Err(1));
    }
}
