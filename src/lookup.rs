//! Pattern 5: Fixed Lookup Map
//!
//! A build-once/read-many map over a const-generic array of `(key, value)`
//! entries. Lookup is a linear scan in insertion order. The closed entry
//! set means a miss is a reportable error rather than a default value.

use std::fmt;

use thiserror::Error;

/// Lookup miss: the key has no entry in the map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("key {key:?} not found in map")]
pub struct KeyNotFound<K: fmt::Debug> {
    pub key: K,
}

/// An immutable map with a fixed set of `N` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMap<K, V, const N: usize> {
    entries: [(K, V); N],
}

impl<K, V, const N: usize> FixedMap<K, V, N> {
    /// Builds the map from its complete entry list. No further entries can
    /// be added and none can be removed.
    pub const fn new(entries: [(K, V); N]) -> Self {
        FixedMap { entries }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: PartialEq, V, const N: usize> FixedMap<K, V, N> {
    /// Returns the value of the first entry whose key equals `key`, or
    /// `None` on a miss.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    /// Like [`FixedMap::get`], but a miss is an error carrying the
    /// offending key.
    pub fn at(&self, key: &K) -> Result<&V, KeyNotFound<K>>
    where
        K: Clone + fmt::Debug,
    {
        self.get(key).ok_or_else(|| KeyNotFound { key: key.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_map() -> FixedMap<&'static str, i32, 3> {
        FixedMap::new([("red", 1), ("blue", 2), ("green", 3)])
    }

    #[test]
    fn present_keys_resolve() {
        let map = color_map();
        assert_eq!(map.at(&"red"), Ok(&1));
        assert_eq!(map.at(&"blue"), Ok(&2));
        assert_eq!(map.at(&"green"), Ok(&3));
    }

    #[test]
    fn missing_key_is_an_error_carrying_the_key() {
        let map = color_map();
        let err = map.at(&"purple").unwrap_err();
        assert_eq!(err, KeyNotFound { key: "purple" });
        assert_eq!(err.to_string(), r#"key "purple" not found in map"#);
    }

    #[test]
    fn get_returns_option() {
        let map = color_map();
        assert_eq!(map.get(&"green"), Some(&3));
        assert_eq!(map.get(&"purple"), None);
    }

    #[test]
    fn first_matching_entry_wins() {
        let map = FixedMap::new([("k", 1), ("k", 2)]);
        assert_eq!(map.get(&"k"), Some(&1));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let keys: Vec<&str> = color_map().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["red", "blue", "green"]);
    }

    #[test]
    fn len_is_the_entry_count() {
        assert_eq!(color_map().len(), 3);
        let empty: FixedMap<&str, i32, 0> = FixedMap::new([]);
        assert!(empty.is_empty());
    }
}
