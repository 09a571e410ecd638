//! Typed projections between Rust values and stored strings.
//!
//! [`IntoParam`] decides how a value is written by [`ParamPackage::set`],
//! [`FromParam`] how it is read back by [`ParamPackage::get`]. Element types
//! of lists implement [`ParamElement`].

use std::borrow::Cow;

use crate::ParamPackage;
use crate::de;
use crate::de::placeholder::protect;
use crate::error::{Error, Result};
use crate::utils::{LIST_SEPARATOR, strip_brackets};
use crate::value::{ParsedValue, is_record_shaped};

/// A value that can be stored in a [`ParamPackage`].
pub trait IntoParam {
    fn into_param(self) -> String;
}

/// A value that can be read from a [`ParamPackage`].
///
/// Returning an error makes the getter fall back to the caller's default.
pub trait FromParam: Sized {
    fn from_param(value: &ParsedValue<'_>) -> Result<Self>;
}

/// A scalar that can also be an element of a list.
pub trait ParamElement: Sized {
    /// Name used in diagnostics.
    const KIND: &'static str;

    fn write_element(&self, out: &mut String);

    fn parse_element(text: &str) -> Option<Self>;
}

macro_rules! scalar_param {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                fn from_param(value: &ParsedValue<'_>) -> Result<Self> {
                    match value {
                        ParsedValue::Scalar(text) => {
                            Self::parse_element(text).ok_or_else(|| Error::parse(Self::KIND, *text))
                        }
                        other => Err(Error::type_mismatch(Self::KIND, other.raw())),
                    }
                }
            }

            impl IntoParam for $ty {
                fn into_param(self) -> String {
                    let mut out = String::new();
                    self.write_element(&mut out);
                    out
                }
            }
        )*
    };
}

macro_rules! integer_element {
    ($($ty:ty),*) => {
        $(
            impl ParamElement for $ty {
                const KIND: &'static str = stringify!($ty);

                fn write_element(&self, out: &mut String) {
                    let mut buffer = itoa::Buffer::new();
                    out.push_str(buffer.format(*self));
                }

                fn parse_element(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }
            }
        )*
        scalar_param!($($ty),*);
    };
}

macro_rules! float_element {
    ($($ty:ty),*) => {
        $(
            impl ParamElement for $ty {
                const KIND: &'static str = stringify!($ty);

                fn write_element(&self, out: &mut String) {
                    let mut buffer = ryu::Buffer::new();
                    out.push_str(buffer.format(*self));
                }

                fn parse_element(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }
            }
        )*
        scalar_param!($($ty),*);
    };
}

integer_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_element!(f32, f64);

impl ParamElement for bool {
    const KIND: &'static str = "bool";

    fn write_element(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }

    fn parse_element(text: &str) -> Option<Self> {
        match text.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

scalar_param!(bool);

impl ParamElement for String {
    const KIND: &'static str = "string";

    fn write_element(&self, out: &mut String) {
        out.push_str(self);
    }

    fn parse_element(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}

/// Strings read back verbatim, whatever their shape.
impl FromParam for String {
    fn from_param(value: &ParsedValue<'_>) -> Result<Self> {
        Ok(value.raw().to_owned())
    }
}

impl IntoParam for String {
    fn into_param(self) -> String {
        self
    }
}

impl IntoParam for &str {
    fn into_param(self) -> String {
        self.to_owned()
    }
}

impl IntoParam for &String {
    fn into_param(self) -> String {
        self.clone()
    }
}

impl IntoParam for Cow<'_, str> {
    fn into_param(self) -> String {
        self.into_owned()
    }
}

impl<T: ParamElement> IntoParam for &[T] {
    fn into_param(self) -> String {
        let mut out = String::with_capacity(2 + self.len() * 4);
        out.push('[');
        for (idx, element) in self.iter().enumerate() {
            if idx > 0 {
                out.push(LIST_SEPARATOR);
            }
            let start = out.len();
            element.write_element(&mut out);
            warn_if_ambiguous(&out[start..]);
        }
        out.push(']');
        if out == "[]" && !self.is_empty() {
            tracing::warn!("a single empty element reads back as an empty list");
        }
        out
    }
}

impl<T: ParamElement> IntoParam for Vec<T> {
    fn into_param(self) -> String {
        self.as_slice().into_param()
    }
}

impl<T: ParamElement, const N: usize> IntoParam for [T; N] {
    fn into_param(self) -> String {
        self.as_slice().into_param()
    }
}

/// A lone record reads as a list of one element.
///
/// `[]` reads as an empty vector, not as the default, so an empty list that
/// was stored reads back as one.
impl<T: ParamElement> FromParam for Vec<T> {
    fn from_param(value: &ParsedValue<'_>) -> Result<Self> {
        match value {
            ParsedValue::List { elements, .. } => {
                elements.iter().map(|element| parse_list_element(element)).collect()
            }
            ParsedValue::Record { inner, .. } => Ok(vec![parse_list_element(inner)?]),
            ParsedValue::Scalar(text) => Err(Error::type_mismatch("list", *text)),
        }
    }
}

fn parse_list_element<T: ParamElement>(text: &str) -> Result<T> {
    if strip_brackets(text).is_some() {
        return Err(Error::nested_list(text));
    }
    T::parse_element(text).ok_or_else(|| Error::parse(T::KIND, text))
}

fn warn_if_ambiguous(element: &str) {
    if element.contains([LIST_SEPARATOR, '[', ']']) {
        tracing::warn!(element, "list element will not read back as written");
    }
}

impl IntoParam for &ParamPackage {
    fn into_param(self) -> String {
        let encoded = self.encode();
        warn_if_split(&encoded);
        format!("[{encoded}]")
    }
}

impl IntoParam for ParamPackage {
    fn into_param(self) -> String {
        (&self).into_param()
    }
}

impl FromParam for ParamPackage {
    fn from_param(value: &ParsedValue<'_>) -> Result<Self> {
        match value {
            ParsedValue::Record { inner, .. } => Ok(de::from_str(inner)),
            other => Err(Error::type_mismatch("record", other.raw())),
        }
    }
}

impl IntoParam for &[ParamPackage] {
    fn into_param(self) -> String {
        let mut out = String::from("[");
        for (idx, package) in self.iter().enumerate() {
            if idx > 0 {
                out.push(LIST_SEPARATOR);
            }
            let encoded = package.encode();
            warn_if_split(&encoded);
            out.push_str(&encoded);
        }
        out.push(']');
        out
    }
}

/// Warns when an encoded package holds a `|` outside nested brackets, which
/// splits it into list elements when read back.
fn warn_if_split(encoded: &str) {
    // separators inside nested brackets are hidden when reading back
    if protect(encoded).text.contains(LIST_SEPARATOR) {
        tracing::warn!(package = %encoded, "package will not read back as written");
    }
}

impl IntoParam for Vec<ParamPackage> {
    fn into_param(self) -> String {
        self.as_slice().into_param()
    }
}

/// Every element must hold an encoded package; a lone record reads as a
/// list of one.
impl FromParam for Vec<ParamPackage> {
    fn from_param(value: &ParsedValue<'_>) -> Result<Self> {
        match value {
            ParsedValue::Record { inner, .. } => Ok(vec![de::from_str(inner)]),
            ParsedValue::List { elements, .. } => elements
                .iter()
                .map(|element| {
                    if is_record_shaped(element) {
                        Ok(de::from_str(element))
                    } else {
                        Err(Error::type_mismatch("record", &**element))
                    }
                })
                .collect(),
            ParsedValue::Scalar(text) => Err(Error::type_mismatch("list of records", *text)),
        }
    }
}
