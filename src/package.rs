use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::map::{self, Map};
use crate::param::{FromParam, IntoParam};
use crate::value::ParsedValue;
use crate::{Config, ser};

/// A string-based key-value container that serializes to a single line.
///
/// Every value is stored as a string. Typed getters and setters project
/// numbers, lists and nested packages to and from that string; see
/// [`ParsedValue`] for how a stored string is read.
///
/// ```
/// use param_package::ParamPackage;
///
/// let mut binding = ParamPackage::new();
/// binding.set("code", 65);
/// binding.set("engine", "keyboard");
/// binding.set("modifiers", vec![16, 17]);
///
/// let encoded = binding.encode();
/// assert_eq!(encoded, "code:65,engine:keyboard,modifiers:[16|17]");
///
/// let decoded = ParamPackage::decode(&encoded);
/// assert_eq!(decoded.get("code", 0), 65);
/// assert_eq!(decoded.get("modifiers", Vec::<i32>::new()), [16, 17]);
/// assert_eq!(decoded.get("missing", 42), 42);
/// ```
///
/// Cloning makes an independent copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamPackage {
    data: Map<String, String>,
}

impl ParamPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a serialized package, skipping any pair that cannot be read.
    pub fn decode(serialized: &str) -> Self {
        crate::de::from_str(serialized)
    }

    /// Serializes the package into a single line.
    ///
    /// An empty package becomes `[empty]`.
    pub fn encode(&self) -> String {
        ser::to_string(self)
    }

    /// Reads `key` as a `T`, falling back to `default` when the key is
    /// missing or its value does not have the shape of a `T`.
    pub fn get<T: FromParam>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.data.get(key) else {
            tracing::debug!(key, "key not found");
            return default;
        };
        match T::from_param(&ParsedValue::classify(raw)) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(key, value = %raw, %err, "using default value");
                default
            }
        }
    }

    /// The stored string under `key`.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// The stored value under `key`, classified by its shape.
    pub fn get_value(&self, key: &str) -> Option<ParsedValue<'_>> {
        self.get_raw(key).map(ParsedValue::classify)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set<K: Into<String>, V: IntoParam>(&mut self, key: K, value: V) {
        self.data.insert(key.into(), value.into_param());
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes `key`, returning its stored string.
    pub fn erase(&mut self, key: &str) -> Option<String> {
        map::remove(&mut self.data, key)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> map::Keys<'_, String, String> {
        self.data.keys()
    }

    pub fn iter(&self) -> map::Iter<'_, String, String> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> map::IterMut<'_, String, String> {
        self.data.iter_mut()
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.data.insert(key, value);
    }
}

impl fmt::Display for ParamPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<&str> for ParamPackage {
    fn from(serialized: &str) -> Self {
        crate::de::from_str(serialized)
    }
}

impl From<String> for ParamPackage {
    fn from(serialized: String) -> Self {
        crate::de::from_str(&serialized)
    }
}

/// Strict parsing: the first unreadable pair is an error.
impl FromStr for ParamPackage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Config::new().strict(true).deserialize_str(s)
    }
}

/// Builds a package from stored strings, as they would be after decoding.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamPackage {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut package = ParamPackage::new();
        package.extend(iter);
        package
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParamPackage {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.data.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for ParamPackage {
    type Item = (String, String);
    type IntoIter = map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParamPackage {
    type Item = (&'a String, &'a String);
    type IntoIter = map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a mut ParamPackage {
    type Item = (&'a String, &'a mut String);
    type IntoIter = map::IterMut<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

/// Serializes as the encoded string, so a package can sit inside any serde
/// format as a plain string field.
impl Serialize for ParamPackage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for ParamPackage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PackageVisitor)
    }
}

struct PackageVisitor;

impl Visitor<'_> for PackageVisitor {
    type Value = ParamPackage;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a serialized parameter package")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ParamPackage::decode(v))
    }
}

#[cfg(test)]
mod test {
    use super::ParamPackage;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_key_returns_default_untouched() {
        let package = ParamPackage::from_iter([("a", "1")]);
        let before = package.clone();
        assert_eq!(package.get("absent", 42), 42);
        assert_eq!(package, before);
    }

    #[test]
    fn set_overwrites() {
        let mut package = ParamPackage::new();
        package.set("k", 1);
        package.set("k", "two");
        assert_eq!(package.get_raw("k"), Some("two"));
        assert_eq!(package.len(), 1);
    }

    #[test]
    fn erase_and_clear() {
        let mut package = ParamPackage::from_iter([("a", "1"), ("b", "2")]);
        assert!(package.has("a"));
        assert_eq!(package.erase("a"), Some("1".to_owned()));
        assert!(!package.has("a"));
        assert_eq!(package.erase("a"), None);
        package.clear();
        assert!(package.is_empty());
        assert_eq!(package.encode(), "[empty]");
    }

    #[test]
    fn clones_are_independent() {
        let mut original = ParamPackage::from_iter([("a", "1")]);
        let copy = original.clone();
        original.set("a", 2);
        assert_eq!(copy.get("a", 0), 1);
        assert_eq!(original.get("a", 0), 2);
    }

    #[test]
    fn iterates_in_key_order() {
        let mut package = ParamPackage::from_iter([("b", "2"), ("a", "1")]);
        for (_, value) in &mut package {
            value.push('!');
        }
        let pairs: Vec<_> = package.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        if cfg!(feature = "indexmap") {
            assert_eq!(pairs, [("b", "2!"), ("a", "1!")]);
        } else {
            assert_eq!(pairs, [("a", "1!"), ("b", "2!")]);
        }
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!(
            "a:1,bad".parse::<ParamPackage>(),
            Err(Error::malformed_pair("bad", 1))
        );
        assert_eq!(ParamPackage::from("a:1,bad").len(), 1);
    }

    #[test]
    fn displays_encoded_form() {
        let package = ParamPackage::from_iter([("k", "a:b")]);
        assert_eq!(package.to_string(), "k:a$0b");
    }
}
