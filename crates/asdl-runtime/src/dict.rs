//! Insertion-ordered map used for `map[K, V]` schema fields.
//!
//! Lookups of absent keys fail with [`Error::KeyNotFound`]; callers that
//! want a fallback pass it explicitly to [`Dict::get_or`].

use std::borrow::Borrow;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;

use crate::convert::ToTree;
use crate::error::Error;
use crate::hnode::{Node, Record};
use crate::strings::quote;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dict<K: Hash + Eq, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> Dict<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces; returns the previous value. A replaced key keeps
    /// its original position.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        match self.entries.get(key) {
            Some(value) => Ok(value),
            None => {
                tracing::debug!(key = ?key, "dict lookup missed");
                Err(Error::KeyNotFound(format!("{key:?}")))
            }
        }
    }

    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).unwrap_or(default)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Dict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a Dict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rendered as `{key=value, ...}` in insertion order. Keys are quoted like
/// string leaves, so integer keys stay bare.
impl<K: Hash + Eq + Display, V: ToTree> ToTree for Dict<K, V> {
    fn to_tree(&self) -> Node {
        self.iter()
            .fold(Record::new("").delimiters("{", "}"), |record, (k, v)| {
                record.field(quote(&k.to_string()), v.to_tree())
            })
            .into()
    }

    fn abbreviated_tree(&self) -> Node {
        self.iter()
            .fold(Record::new("").delimiters("{", "}"), |record, (k, v)| {
                record.field(quote(&k.to_string()), v.abbreviated_tree())
            })
            .into()
    }
}
