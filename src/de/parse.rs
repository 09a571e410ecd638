use std::borrow::Cow;

use crate::Config;
use crate::ParamPackage;
use crate::error::{Error, Result};
use crate::utils::{EMPTY_PLACEHOLDER, KEY_VALUE_SEPARATOR, PARAM_SEPARATOR, nesting_depth};

use super::placeholder::{Protected, protect, restore};

mod decode;

pub use decode::unescape;

/// Parses a serialized package.
///
/// Bracketed values are hidden behind placeholders first, so that only the
/// top-level `,` and `:` split the input. Escape sequences are decoded in
/// both the pair text and the hidden spans before the spans go back in.
pub fn parse(input: &str, config: Config) -> Result<ParamPackage> {
    let mut package = ParamPackage::new();
    if input == EMPTY_PLACEHOLDER {
        return Ok(package);
    }

    let Protected { text, lookup } = protect(input);
    let lookup: Vec<Cow<'_, str>> = lookup.into_iter().map(unescape).collect();

    for (index, pair) in text.split(PARAM_SEPARATOR).enumerate() {
        let mut parts = pair.split(KEY_VALUE_SEPARATOR);
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            let pair = restore(pair, &lookup);
            reject(config, Error::malformed_pair(pair, index))?;
            continue;
        };

        let key = restore(&unescape(key), &lookup).into_owned();
        let value = restore(&unescape(value), &lookup).into_owned();

        match nesting_depth(&value) {
            Ok(depth) if depth > config.max_depth => {
                reject(config, Error::too_deep(key, depth, config.max_depth))?;
                continue;
            }
            Err(position) if config.strict => {
                return Err(Error::unbalanced(value, position));
            }
            // an unbalanced bracket in lenient mode is just text
            _ => {}
        }

        package.insert(key, value);
    }

    Ok(package)
}

/// Drops an unreadable part of the input, or fails on it in strict mode.
fn reject(config: Config, err: Error) -> Result<()> {
    if config.strict {
        return Err(err);
    }
    tracing::error!(%err, "skipping unreadable pair");
    Ok(())
}
