use std::collections::HashMap;
use std::hash::Hash;

/// A generic associative container with unique keys.
///
/// Insertion order is not significant and [`Dict::keys`] makes no ordering
/// promise. [`Dict::get`] falls back to the value type's zero value for
/// absent keys; callers that need presence use [`Dict::lookup`].
#[derive(Debug, Clone)]
pub struct Dict<K, V> {
    map: HashMap<K, V>,
}

// Derived PartialEq would only require `K: PartialEq`, but comparing the
// backing maps needs the full key bounds.
impl<K: Eq + Hash, V: PartialEq> PartialEq for Dict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Eq + Hash, V> Dict<K, V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Returns the value for `k`, or `V::default()` if absent.
    pub fn get(&self, k: &K) -> V
    where
        V: Default + Clone,
    {
        self.map.get(k).cloned().unwrap_or_default()
    }

    /// Inserts the pair, replacing any existing entry with the same key.
    pub fn add(&mut self, k: K, v: V) {
        self.map.insert(k, v);
    }

    pub fn lookup(&self, k: &K) -> Option<&V> {
        self.map.get(k)
    }

    pub fn contains(&self, k: &K) -> bool {
        self.map.contains_key(k)
    }

    /// Removes the entry with the given key; a no-op if absent.
    pub fn remove(&mut self, k: &K) {
        self.map.remove(k);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All entry keys, materialized, in no particular order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.map.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    pub(crate) fn replace(&mut self, map: HashMap<K, V>) {
        self.map = map;
    }
}

impl<K: Eq + Hash, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Dict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
