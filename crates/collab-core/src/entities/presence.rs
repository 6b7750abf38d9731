//! Presence and room event shapes
//!
//! Neither shape declares fields of its own; applications extend them at
//! runtime. Both are backed by [`OpenRecord`], a JSON object that carries an
//! optional schema version alongside its fields.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// Key holding the schema version on the wire
pub const VERSION_KEY: &str = "$version";

/// Open JSON record with a schema version
///
/// Serializes as a flat JSON object. The version is stored under the
/// `$version` key and omitted while it is zero, so no field may use that
/// name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenRecord {
    #[serde(rename = "$version", default, skip_serializing_if = "is_unversioned")]
    version: u32,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

fn is_unversioned(version: &u32) -> bool {
    *version == 0
}

impl OpenRecord {
    /// Create an empty, unversioned record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record tagged with a schema version
    pub fn with_version(version: u32) -> Self {
        Self {
            version,
            fields: Map::new(),
        }
    }

    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a field, returning the previous value if any
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, DomainError> {
        let key = key.into();
        if key == VERSION_KEY {
            return Err(DomainError::ReservedField(key));
        }
        Ok(self.fields.insert(key, value.into()))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    /// Shallow-merge another record's fields into this one
    ///
    /// The version of `self` is kept.
    pub fn merge(&mut self, patch: OpenRecord) {
        self.fields.extend(patch.fields);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Per-participant ephemeral state broadcast to everyone in the room
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Presence(OpenRecord);

/// Ad-hoc message broadcast to the room
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomEvent(OpenRecord);

macro_rules! open_record_newtype {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self(OpenRecord::new())
            }

            pub fn into_inner(self) -> OpenRecord {
                self.0
            }
        }

        impl From<OpenRecord> for $name {
            fn from(record: OpenRecord) -> Self {
                Self(record)
            }
        }

        impl Deref for $name {
            type Target = OpenRecord;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

open_record_newtype!(Presence);
open_record_newtype!(RoomEvent);
