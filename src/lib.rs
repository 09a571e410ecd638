//! Single-line key-value records with nested lists and records
//!
//! A [`ParamPackage`] is a small string-to-string map that serializes to one
//! line of text, meant for configuration-like values (input bindings, device
//! settings) that have to survive being stored in a text field or a config
//! file.
//!
//! ## Format
//!
//! ```text
//! record := "[empty]" | pair ("," pair)*
//! pair   := escaped-key ":" escaped-value
//! list   := "[" elem ("|" elem)* "]"
//! ```
//!
//! Inside keys and values, `:` is written `$0`, `,` is written `$1` and `$`
//! is written `$2`. Brackets are never escaped: they delimit lists and nested
//! records, which are stored as ordinary values.
//!
//! ## Supported Types
//!
//! Values are strings. [`ParamPackage::set`] and [`ParamPackage::get`]
//! project integers, floats, `bool`, strings, lists of those, nested
//! packages and lists of nested packages. Getters never fail: a missing key
//! or a value of the wrong shape yields the default the caller passed in.
//!
//! ## Usage
//!
//! ```
//! use param_package::ParamPackage;
//!
//! let mut stick = ParamPackage::new();
//! stick.set("axis_x", 0);
//! stick.set("axis_y", 1);
//! stick.set("deadzone", 0.15);
//!
//! let mut binding = ParamPackage::new();
//! binding.set("buttons", vec![3, 4, 5]);
//! binding.set("engine", "sdl");
//! binding.set("port", 0);
//! binding.set("stick", &stick);
//!
//! let line = binding.encode();
//! assert_eq!(
//!     line,
//!     "buttons:[3|4|5],engine:sdl,port:0,stick:[axis_x$00$1axis_y$01$1deadzone$00.15]"
//! );
//!
//! let restored = ParamPackage::decode(&line);
//! assert_eq!(restored, binding);
//! assert_eq!(restored.get("stick", ParamPackage::new()), stick);
//! assert_eq!(restored.get("buttons", Vec::<u8>::new()), [3, 4, 5]);
//!
//! // the wrong shape falls back to the default
//! assert_eq!(restored.get("buttons", ParamPackage::new()), ParamPackage::new());
//! ```
//!
//! For callers that would rather hear about unreadable input than have it
//! skipped, see [`Config::strict`].

mod config;
pub mod de;
mod error;
pub mod map;
mod package;
mod param;
pub mod ser;
mod utils;
mod value;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use de::from_str;
pub use error::{Error, Result};
pub use package::ParamPackage;
pub use param::{FromParam, IntoParam, ParamElement};
#[doc(inline)]
pub use ser::{to_string, to_writer};
pub use utils::{
    EMPTY_PLACEHOLDER, ESCAPE_CHARACTER, KEY_VALUE_SEPARATOR, LIST_SEPARATOR, PARAM_SEPARATOR,
};
pub use value::ParsedValue;
