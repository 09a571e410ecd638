//! Serialization support for parameter packages.

mod encode;

pub use encode::escape;

use crate::ParamPackage;
use crate::utils::{EMPTY_PLACEHOLDER, KEY_VALUE_SEPARATOR, PARAM_SEPARATOR};

use std::convert::Infallible;
use std::io::{self, Write};

/// Serializes a package into a string.
///
/// ```
/// use param_package::ParamPackage;
///
/// let mut package = ParamPackage::new();
/// package.set("engine", "sdl");
/// package.set("port", 0);
///
/// assert_eq!(param_package::to_string(&package), "engine:sdl,port:0");
/// assert_eq!(param_package::to_string(&ParamPackage::new()), "[empty]");
/// ```
pub fn to_string(package: &ParamPackage) -> String {
    let mut output = String::with_capacity(estimate_len(package));
    let Ok(()) = write_parts::<Infallible>(package, |part| {
        output.push_str(part);
        Ok(())
    });
    output
}

/// Serializes a package into a generic writer.
///
/// ```
/// use param_package::ParamPackage;
///
/// let package = ParamPackage::from_iter([("code", "1,2")]);
///
/// let mut buffer = Vec::new();
/// param_package::to_writer(&package, &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "code:1$12");
/// ```
pub fn to_writer<W: Write>(package: &ParamPackage, writer: &mut W) -> io::Result<()> {
    write_parts(package, |part| writer.write_all(part.as_bytes()))
}

/// Feeds the serialized package to `sink` piece by piece.
fn write_parts<E>(
    package: &ParamPackage,
    mut sink: impl FnMut(&str) -> Result<(), E>,
) -> Result<(), E> {
    if package.is_empty() {
        return sink(EMPTY_PLACEHOLDER);
    }

    let mut buffer = [0u8; 4];
    for (idx, (key, value)) in package.iter().enumerate() {
        if idx > 0 {
            sink(PARAM_SEPARATOR.encode_utf8(&mut buffer))?;
        }
        sink(&escape(key))?;
        sink(KEY_VALUE_SEPARATOR.encode_utf8(&mut buffer))?;
        sink(&escape(value))?;
    }
    Ok(())
}

fn estimate_len(package: &ParamPackage) -> usize {
    // a guess: escaping rarely adds more than a few bytes per pair
    package
        .iter()
        .map(|(key, value)| key.len() + value.len() + 2)
        .sum::<usize>()
        .max(EMPTY_PLACEHOLDER.len())
}
