use crate::ParamPackage;
use crate::error::Result;

/// Configuration for reading parameter packages.
///
/// The default configuration is lenient: a pair that cannot be read is
/// logged and dropped, and the rest of the package still loads. This is what
/// [`crate::from_str`] and `ParamPackage::from(&str)` use.
///
/// ## Nesting Depth
///
/// `max_depth` bounds how deeply brackets may nest inside a single value.
/// Values beyond the limit are rejected as a whole, never truncated. A
/// `max_depth` of 0 only admits plain scalars.
///
/// Default value: `max_depth = 5`
///
/// ```
/// use param_package::Config;
///
/// let package = Config::new().max_depth(0).deserialize_str("a:1,b:[1|2]").unwrap();
/// assert!(package.has("a"));
/// assert!(!package.has("b"));
/// ```
///
/// ## Strict Mode
///
/// With `strict(true)` the first unreadable pair, over-deep value or
/// unbalanced bracket is returned as an [`Error`](crate::Error) instead.
///
/// ```
/// use param_package::Config;
///
/// let strict = Config::new().strict(true);
/// assert!(strict.deserialize_str("a:1,bad,c:3").is_err());
/// assert_eq!(Config::new().deserialize_str("a:1,bad,c:3").unwrap().len(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) max_depth: usize,
    pub(crate) strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            max_depth: 5,
            strict: false,
        }
    }

    /// Specifies the deepest bracket nesting accepted inside one value.
    /// Default is 5.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Report unreadable input as an error instead of skipping it.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Deserializes a parameter package from a `&str` using this `Config`.
    ///
    /// Never fails unless `strict` is set.
    pub fn deserialize_str(self, input: &str) -> Result<ParamPackage> {
        crate::de::parse(input, self)
    }
}
