//! Deserialization support for parameter packages.
//!
//! ### An overview of the decoder
//!
//! A serialized package is a flat run of `key:value` pairs joined by `,`.
//! Values may carry lists (`[1|2|3]`) and nested packages (`[a:1,b:2]`)
//! whose own separators must not split the outer package.
//!
//! The `placeholder` module hides every top-level bracket span behind a
//! `##i` token, after which the `parse` module can split the input on plain
//! separators, decode the escape sequences and put the hidden spans back.
//!
//! Nothing in here interprets a value: the parsed package holds strings
//! only, and [`ParsedValue`](crate::ParsedValue) works out their shape when a
//! typed getter asks for one.

mod parse;
pub mod placeholder;

pub(crate) use parse::parse;
pub use parse::unescape;

use crate::{Config, ParamPackage};

/// Deserializes a parameter package from a `&str`.
///
/// This never fails: pairs that cannot be read are logged and skipped.
///
/// ```
/// let package = param_package::from_str("a:1,bad,c:3");
/// assert_eq!(package.get("a", 0), 1);
/// assert_eq!(package.get("c", 0), 3);
/// assert_eq!(package.len(), 2);
/// ```
pub fn from_str(input: &str) -> ParamPackage {
    // the lenient parser reports nothing, so there is no error to lose here
    Config::new().deserialize_str(input).unwrap_or_default()
}
