//! Ordered field map backing one table row.
//!
//! This module provides [`Row`], a wrapper around [`IndexMap`] that maps
//! field names to cell [`Value`]s in schema order. Field order matters: the
//! serializer derives a table's header from the first row's key order, and
//! the parser inserts fields in the order the schema declares them.
//!
//! ## Why IndexMap?
//!
//! A `HashMap` would lose the declared field order and make serialization
//! output nondeterministic. `IndexMap` keeps insertion order, so a parsed
//! row re-serializes with the same header its schema declared.
//!
//! ## Examples
//!
//! ```rust
//! use toon_tables::{Row, Value};
//!
//! let mut row = Row::new();
//! row.insert("id".to_string(), Value::from(1));
//! row.insert("name".to_string(), Value::from("Alice"));
//!
//! assert_eq!(row.len(), 2);
//! assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! let fields: Vec<_> = row.keys().cloned().collect();
//! assert_eq!(fields, vec!["id", "name"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered sequence of rows sharing one schema.
pub type Table = Vec<Row>;

/// One data row: an insertion-ordered map from field name to cell value.
///
/// # Examples
///
/// ```rust
/// use toon_tables::{Row, Value};
///
/// let mut row = Row::new();
/// row.insert("first".to_string(), Value::from(1));
/// row.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = row.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row(IndexMap<String, Value>);

impl Row {
    /// Creates an empty `Row`.
    #[must_use]
    pub fn new() -> Self {
        Row(IndexMap::new())
    }

    /// Creates an empty `Row` with capacity for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Row(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field. If the row already contained this field, the old
    /// value is returned and the field keeps its original position.
    pub fn insert(&mut self, field: String, value: Value) -> Option<Value> {
        self.0.insert(field, value)
    }

    /// Returns a reference to the value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns `true` if the row has a value for `field`.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the number of fields in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over `(field, value)` pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Row(IndexMap::from_iter(iter))
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field names to cell values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut row = Row::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((field, value)) = access.next_entry()? {
                    row.insert(field, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}
