//! The map backing a [`ParamPackage`](crate::ParamPackage).
//!
//! By default entries are kept in key order, so two packages holding the same
//! pairs always encode to the same string. With the `indexmap` feature the
//! entries keep their insertion order instead.

#[cfg(feature = "indexmap")]
mod inner {
    pub type Map<K, V> = indexmap::IndexMap<K, V>;
    pub type Iter<'a, K, V> = indexmap::map::Iter<'a, K, V>;
    pub type IterMut<'a, K, V> = indexmap::map::IterMut<'a, K, V>;
    pub type IntoIter<K, V> = indexmap::map::IntoIter<K, V>;
    pub type Keys<'a, K, V> = indexmap::map::Keys<'a, K, V>;

    pub(crate) fn remove<V>(map: &mut Map<String, V>, key: &str) -> Option<V> {
        // keep the order of the remaining entries
        map.shift_remove(key)
    }
}

#[cfg(not(feature = "indexmap"))]
mod inner {
    pub type Map<K, V> = std::collections::BTreeMap<K, V>;
    pub type Iter<'a, K, V> = std::collections::btree_map::Iter<'a, K, V>;
    pub type IterMut<'a, K, V> = std::collections::btree_map::IterMut<'a, K, V>;
    pub type IntoIter<K, V> = std::collections::btree_map::IntoIter<K, V>;
    pub type Keys<'a, K, V> = std::collections::btree_map::Keys<'a, K, V>;

    pub(crate) fn remove<V>(map: &mut Map<String, V>, key: &str) -> Option<V> {
        map.remove(key)
    }
}

pub use inner::{IntoIter, Iter, IterMut, Keys, Map};
pub(crate) use inner::remove;
