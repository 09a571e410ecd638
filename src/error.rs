use std::fmt;

/// Everything that can go wrong while reading a parameter package.
///
/// The lenient entry points ([`crate::from_str`], [`crate::ParamPackage::get`])
/// never hand one of these to the caller: they log it and carry on. Only
/// [`crate::Config::deserialize_str`] in strict mode returns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A pair did not split into exactly one key and one value.
    MalformedPair { pair: String, index: usize },
    /// A bracket without a partner.
    Unbalanced { value: String, position: usize },
    /// A value nested deeper than [`crate::Config::max_depth`] allows.
    TooDeep {
        key: String,
        depth: usize,
        max_depth: usize,
    },
    /// The stored value has a different shape than the one asked for.
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
    /// A scalar could not be parsed as the requested type.
    Parse {
        expected: &'static str,
        found: String,
    },
    /// A list element is itself a bracketed list.
    NestedList { found: String },
}

impl Error {
    pub fn malformed_pair<T: Into<String>>(pair: T, index: usize) -> Self {
        Error::MalformedPair {
            pair: pair.into(),
            index,
        }
    }

    pub fn unbalanced<T: Into<String>>(value: T, position: usize) -> Self {
        Error::Unbalanced {
            value: value.into(),
            position,
        }
    }

    pub fn too_deep<T: Into<String>>(key: T, depth: usize, max_depth: usize) -> Self {
        Error::TooDeep {
            key: key.into(),
            depth,
            max_depth,
        }
    }

    pub fn type_mismatch<T: Into<String>>(expected: &'static str, found: T) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    pub fn parse<T: Into<String>>(expected: &'static str, found: T) -> Self {
        Error::Parse {
            expected,
            found: found.into(),
        }
    }

    pub fn nested_list<T: Into<String>>(found: T) -> Self {
        Error::NestedList {
            found: found.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedPair { pair, index } => {
                write!(f, "invalid key pair `{pair}` at pair {index}")
            }
            Error::Unbalanced { value, position } => {
                write!(f, "unbalanced bracket at position {position} in `{value}`")
            }
            Error::TooDeep {
                key,
                depth,
                max_depth,
            } => write!(
                f,
                "value of `{key}` is nested {depth} levels deep, the limit is {max_depth}"
            ),
            Error::TypeMismatch { expected, found } => {
                write!(f, "expected a {expected}, found `{found}`")
            }
            Error::Parse { expected, found } => {
                write!(f, "failed to convert `{found}` to {expected}")
            }
            Error::NestedList { found } => {
                write!(f, "nested lists are not supported: `{found}`")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;
