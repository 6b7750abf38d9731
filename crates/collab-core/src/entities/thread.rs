//! Comment thread metadata
//!
//! Thread metadata is stored by the collaboration service as a flat map whose
//! values may only be booleans, strings, or numbers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::DomainError;

/// Largest magnitude of `time` that converts to a timestamp
const MAX_TIMESTAMP_MILLIS: f64 = 8.0e15;

/// A single thread metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(Number),
    String(String),
}

/// Flat thread metadata map
pub type MetadataMap = BTreeMap<String, MetadataValue>;

impl MetadataValue {
    /// Convert a JSON value, rejecting null, arrays, and objects
    pub fn from_json(key: &str, value: &Value) -> Result<Self, DomainError> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => Ok(Self::Number(n.clone())),
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                Err(DomainError::invalid_metadata(key, "expected boolean, string, or number"))
            }
        }
    }

    /// Parse a JSON object into a validated metadata map
    pub fn parse_map(value: &Value) -> Result<MetadataMap, DomainError> {
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::invalid_metadata("<root>", "expected an object"))?;

        object
            .iter()
            .map(|(key, value)| Self::from_json(key, value).map(|v| (key.clone(), v)))
            .collect()
    }

    fn from_f64(key: &str, value: f64) -> Result<Self, DomainError> {
        Number::from_f64(value)
            .map(Self::Number)
            .ok_or_else(|| DomainError::invalid_metadata(key, "number must be finite"))
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Metadata attached to each comment thread on the canvas
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadMetadata {
    pub resolved: bool,
    pub z_index: i64,
    /// Unix milliseconds, possibly fractional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    pub x: f64,
    pub y: f64,
}

impl ThreadMetadata {
    /// Create unresolved metadata for a thread pinned at `(x, y)`
    pub fn new(x: f64, y: f64, z_index: i64) -> Self {
        Self {
            resolved: false,
            z_index,
            time: None,
            x,
            y,
        }
    }

    /// Stamp the thread with the given time
    #[allow(clippy::cast_precision_loss)]
    pub fn with_time(mut self, at: DateTime<Utc>) -> Self {
        self.time = Some(at.timestamp_millis() as f64);
        self
    }

    pub fn resolve(&mut self) {
        self.resolved = true;
    }

    pub fn reopen(&mut self) {
        self.resolved = false;
    }

    /// The `time` field as a UTC timestamp, truncated to whole milliseconds
    ///
    /// `None` when the field is absent or outside the representable range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.time
            .filter(|millis| millis.is_finite() && millis.abs() < MAX_TIMESTAMP_MILLIS)
            .and_then(|millis| DateTime::from_timestamp_millis(millis.trunc() as i64))
    }

    /// Flatten into the map form stored by the collaboration service
    pub fn to_metadata(&self) -> Result<MetadataMap, DomainError> {
        let mut map = MetadataMap::new();
        map.insert("resolved".to_string(), self.resolved.into());
        map.insert("zIndex".to_string(), self.z_index.into());
        if let Some(time) = self.time {
            map.insert("time".to_string(), MetadataValue::from_f64("time", time)?);
        }
        map.insert("x".to_string(), MetadataValue::from_f64("x", self.x)?);
        map.insert("y".to_string(), MetadataValue::from_f64("y", self.y)?);
        Ok(map)
    }
}
