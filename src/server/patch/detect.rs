//! Change detection between a stored record and a patch.
//!
//! Both sides are serialized to JSON and compared field by field. Only keys present
//! and non-null in the patch are considered. Values are compared structurally: objects
//! key by key with null members dropped, sequences element-wise.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::server::error::internal::InternalError;

/// Fields of a patch whose values differ from the stored record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    changes: BTreeMap<String, Value>,
}

impl ChangeSet {
    /// Compares `patch` against `existing`.
    ///
    /// # Arguments
    /// - `existing` - Current record, serializing with the same field names as the patch
    /// - `patch` - Partial payload; unset fields must serialize as absent or null
    ///
    /// # Returns
    /// - `Ok(ChangeSet)` - Differing fields mapped to their new value (possibly empty)
    /// - `Err(InternalError)` - Either side failed to serialize to a JSON object
    pub fn detect<R, P>(existing: &R, patch: &P) -> Result<Self, InternalError>
    where
        R: Serialize + ?Sized,
        P: Serialize + ?Sized,
    {
        let existing = to_object(existing, "record")?;
        let patch = to_object(patch, "patch")?;

        let mut changes = BTreeMap::new();
        for (field, value) in patch {
            if value.is_null() {
                continue;
            }

            let value = normalize(value);
            let current = existing.get(&field).cloned().map(normalize);

            if current.as_ref() != Some(&value) {
                changes.insert(field, value);
            }
        }

        Ok(Self { changes })
    }

    /// True when no set field differs; the patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.changes.contains_key(field)
    }

    /// Names of the changed fields in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }
}

fn to_object<T: Serialize + ?Sized>(
    value: &T,
    what: &'static str,
) -> Result<Map<String, Value>, InternalError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(InternalError::PatchNotAnObject { what }),
        Err(source) => Err(InternalError::PatchSerialization { what, source }),
    }
}

/// Drops null object members recursively so absent and null compare equal.
fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, normalize(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}
