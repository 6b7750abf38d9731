//! Shared room storage - the document that outlives its participants

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shared persistent document of a room
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    #[serde(default)]
    pub canvas_objects: BTreeMap<String, Value>,
}

impl Storage {
    /// Create an empty storage document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.canvas_objects.get(key)
    }

    /// Insert or replace an object, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.canvas_objects.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.canvas_objects.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.canvas_objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.canvas_objects.is_empty()
    }

    /// Object keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.canvas_objects.keys().map(String::as_str)
    }
}
