//! Working out what a stored string holds.

use std::borrow::Cow;

use crate::de::placeholder::{Protected, protect, restore};
use crate::utils::{
    EMPTY_PLACEHOLDER, KEY_VALUE_SEPARATOR, LIST_SEPARATOR, PARAM_SEPARATOR, strip_brackets,
};

/// A stored value, classified by its syntax.
///
/// Values are always stored as strings. Brackets and separators decide how a
/// typed getter reads them:
///
/// - `Scalar`: anything not enclosed in one outer `[` `]` pair
/// - `List`: `[a|b|c]`, split on the outer `|` only
/// - `Record`: `[encoded-package]`, with separators but no outer `|`
///
/// ```
/// use param_package::ParsedValue;
///
/// assert!(matches!(ParsedValue::classify("sdl"), ParsedValue::Scalar("sdl")));
/// assert!(matches!(ParsedValue::classify("[1|2|3]"), ParsedValue::List { .. }));
/// assert!(matches!(ParsedValue::classify("[a:1]"), ParsedValue::Record { inner: "a:1", .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedValue<'a> {
    Scalar(&'a str),
    List {
        raw: &'a str,
        elements: Vec<Cow<'a, str>>,
    },
    Record {
        raw: &'a str,
        /// The encoded package, without its brackets.
        inner: &'a str,
    },
}

impl<'a> ParsedValue<'a> {
    /// Classifies a stored value.
    ///
    /// `[]` is an empty list. A bracketed value without any outer separator,
    /// like `[x]`, is a list of one element.
    pub fn classify(raw: &'a str) -> Self {
        let Some(inner) = strip_brackets(raw) else {
            return ParsedValue::Scalar(raw);
        };
        if inner == EMPTY_PLACEHOLDER {
            return ParsedValue::Record { raw, inner };
        }

        // only the outer layer decides; nested lists and records are hidden
        let Protected { text, lookup } = protect(inner);
        if is_record_text(&text) {
            return ParsedValue::Record { raw, inner };
        }

        let elements = if inner.is_empty() {
            Vec::new()
        } else {
            match text {
                // nothing was hidden, so the elements can borrow
                Cow::Borrowed(text) => text.split(LIST_SEPARATOR).map(Cow::Borrowed).collect(),
                Cow::Owned(text) => text
                    .split(LIST_SEPARATOR)
                    .map(|element| Cow::Owned(restore(element, &lookup).into_owned()))
                    .collect(),
            }
        };
        ParsedValue::List { raw, elements }
    }

    /// The stored string this value was classified from.
    pub fn raw(&self) -> &'a str {
        match self {
            ParsedValue::Scalar(raw)
            | ParsedValue::List { raw, .. }
            | ParsedValue::Record { raw, .. } => *raw,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParsedValue::Scalar(_) => "scalar",
            ParsedValue::List { .. } => "list",
            ParsedValue::Record { .. } => "record",
        }
    }
}

/// Whether `text`, one element of a list of packages, holds an encoded package.
pub(crate) fn is_record_shaped(text: &str) -> bool {
    text == EMPTY_PLACEHOLDER || is_record_text(&protect(text).text)
}

fn is_record_text(protected: &str) -> bool {
    !protected.contains(LIST_SEPARATOR)
        && protected.contains([PARAM_SEPARATOR, KEY_VALUE_SEPARATOR])
}
