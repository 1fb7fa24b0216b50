//! Case-insensitive string keys.
//!
//! Settlement names come from free-text reports and differ in case from
//! one report to the next. Keys are folded once on the way in so lookups
//! never need their own case conversion.

use std::collections::BTreeMap;

/// Folds a key for case-insensitive comparison.
fn fold(key: &str) -> String {
    key.to_lowercase()
}

/// A map from case-insensitive string keys to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaselessMap<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for CaselessMap<V> {
    fn default() -> Self {
        CaselessMap {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> CaselessMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the one it replaced under the same folded key.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.entries.insert(fold(key), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&fold(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries by folded key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for CaselessMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = CaselessMap::new();
        for (k, v) in iter {
            map.insert(k.as_ref(), v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case() {
        let mut map = CaselessMap::new();
        map.insert("Foo", 1);
        assert_eq!(map.get("foo"), Some(&1));
        assert_eq!(map.get("FOO"), Some(&1));
        assert!(map.contains_key("fOo"));
        assert_eq!(map.get("bar"), None);
    }

    #[test]
    fn keys_differing_only_in_case_collide() {
        let mut map: CaselessMap<i32> = [("Foo", 1)].into_iter().collect();
        assert_eq!(map.insert("FOO", 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("foo", &2)]);
    }
}
