//! Ordered map view of a configuration document.
//!
//! [`ConfigMap`] wraps an [`IndexMap`] so that keys iterate, and serialize, in
//! the order they were first declared. Inserting a key that already exists
//! replaces its value but keeps its original position, which is exactly the
//! last-write-wins behavior of [`Document::to_map`](crate::Document::to_map).
//!
//! ## Examples
//!
//! ```rust
//! use kvconf::{ConfigMap, ConfigValue};
//!
//! let mut map = ConfigMap::new();
//! map.insert("name".to_string(), ConfigValue::from("Alice"));
//! map.insert("port".to_string(), ConfigValue::from(8080));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::ConfigValue;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An insertion-ordered map of string keys to configuration values.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigMap(IndexMap<String, ConfigValue>);

impl ConfigMap {
    /// Creates an empty `ConfigMap`.
    #[must_use]
    pub fn new() -> Self {
        ConfigMap(IndexMap::new())
    }

    /// Creates an empty `ConfigMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ConfigMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::{ConfigMap, ConfigValue};
    ///
    /// let mut map = ConfigMap::new();
    /// assert!(map.insert("key".to_string(), ConfigValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), ConfigValue::from(43)).is_some());
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(43));
    /// ```
    pub fn insert(&mut self, key: String, value: ConfigValue) -> Option<ConfigValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ConfigValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, ConfigValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }
}

impl Default for ConfigMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, ConfigValue>> for ConfigMap {
    fn from(map: HashMap<String, ConfigValue>) -> Self {
        ConfigMap(map.into_iter().collect())
    }
}

impl From<ConfigMap> for HashMap<String, ConfigValue> {
    fn from(map: ConfigMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigMap {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        ConfigMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for ConfigMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConfigMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigMapVisitor;

        impl<'de> Visitor<'de> for ConfigMapVisitor {
            type Value = ConfigMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of keys to strings, numbers or booleans")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = ConfigMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ConfigMapVisitor)
    }
}
