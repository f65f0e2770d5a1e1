//! Property List Module
//!
//! Ordered, duplicate-free storage of parsed key properties.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

// == Property List ==
/// Key properties in the order they first appear in the source name.
///
/// Values are kept exactly as written, including surrounding quotes and
/// escape sequences of quoted values.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PropertyList {
    properties: IndexMap<String, String>,
}

impl PropertyList {
    // == Constructor ==
    /// Creates an empty property list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Adds a property. A repeated name takes the new value but keeps the
    /// position where it first appeared.
    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates `(name, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

// Builds a list from pairs with the same duplicate handling as parsing.
impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for PropertyList {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (name, value) in iter {
            list.insert(name.as_ref(), value.as_ref());
        }
        list
    }
}

// Order-sensitive, unlike `IndexMap` equality.
impl PartialEq for PropertyList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for PropertyList {}

// Renders `name=value` pairs joined by commas, reproducing a well-formed input.
impl fmt::Display for PropertyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}
