//! Hiding bracketed spans from the top-level splitter.
//!
//! Lists and nested records are written inline, so their separators look just
//! like the separators of the record around them. [`protect`] swaps every
//! top-level `[...]` span for a short `##i` token before splitting, and
//! [`restore`] puts the spans back afterwards.
//!
//! A `#` already present in the input is written as `#h` by `protect`, and
//! a token directly followed by a digit is closed with `#e`, so `restore`
//! never confuses input text with a token.
//!
//! ```
//! use param_package::de::placeholder::{protect, restore};
//!
//! let protected = protect("a:[1|2],b:[x:[3]]");
//! assert_eq!(protected.text, "a:##0,b:##1");
//! assert_eq!(protected.lookup, ["[1|2]", "[x:[3]]"]);
//! assert_eq!(restore(&protected.text, &protected.lookup), "a:[1|2],b:[x:[3]]");
//! ```

use std::borrow::Cow;

/// Output of [`protect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Protected<'a> {
    /// The input with every top-level bracket span replaced by `##i`.
    pub text: Cow<'a, str>,
    /// The replaced spans, brackets included, in the order they appeared.
    pub lookup: Vec<&'a str>,
}

/// Replaces each top-level `[...]` span of `input` with `##i`, where `i` is
/// the span's index in the returned lookup list.
///
/// Brackets nested inside a span belong to that span. A `]` without an
/// opening partner, and a `[` that is never closed, stay literal text.
pub fn protect(input: &str) -> Protected<'_> {
    if !input.bytes().any(|b| b == b'[' || b == b'#') {
        return Protected {
            text: Cow::Borrowed(input),
            lookup: Vec::new(),
        };
    }

    let bytes = input.as_bytes();
    let closing = matching_brackets(bytes);
    let mut text = String::with_capacity(input.len());
    let mut lookup = Vec::new();
    // start of the text not yet copied to `text`
    let mut copied = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        // unmatched `[` and every `]` outside a span are plain text
        let Some(end) = closing[idx] else {
            idx += 1;
            continue;
        };
        shield(&mut text, &input[copied..idx]);
        let mut buffer = itoa::Buffer::new();
        text.push_str("##");
        text.push_str(buffer.format(lookup.len()));
        if bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
            text.push_str("#e");
        }
        lookup.push(&input[idx..=end]);
        copied = end + 1;
        idx = end + 1;
    }

    shield(&mut text, &input[copied..]);
    Protected {
        text: Cow::Owned(text),
        lookup,
    }
}

/// Replaces each `##i` token in `text` with `lookup[i]`.
///
/// The exact inverse of [`protect`]: spans are inserted verbatim and are not
/// scanned again. A token with no lookup entry is left in place.
pub fn restore<'s, S: AsRef<str>>(text: &'s str, lookup: &[S]) -> Cow<'s, str> {
    if !text.contains('#') {
        return Cow::Borrowed(text);
    }

    let mut restored = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('#') {
        restored.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('h') {
            restored.push('#');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix('e') {
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix('#') {
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                let token = &after[..digits];
                match token.parse::<usize>().ok().and_then(|i| lookup.get(i)) {
                    Some(original) => {
                        restored.push_str(original.as_ref());
                        rest = &after[digits..];
                        continue;
                    }
                    None => {
                        tracing::error!(token, entries = lookup.len(), "placeholder has no lookup entry");
                    }
                }
            }
        }

        restored.push('#');
        rest = tail;
    }
    restored.push_str(rest);
    Cow::Owned(restored)
}

/// For every `[` that has a partner, the offset of its `]`.
fn matching_brackets(bytes: &[u8]) -> Vec<Option<usize>> {
    let mut closing = vec![None; bytes.len()];
    let mut open = Vec::new();
    for (idx, b) in bytes.iter().enumerate() {
        match b {
            b'[' => open.push(idx),
            b']' => {
                if let Some(start) = open.pop() {
                    closing[start] = Some(idx);
                }
            }
            _ => {}
        }
    }
    closing
}

fn shield(text: &mut String, segment: &str) {
    let mut rest = segment;
    while let Some(pos) = rest.find('#') {
        text.push_str(&rest[..=pos]);
        text.push('h');
        rest = &rest[pos + 1..];
    }
    text.push_str(rest);
}
