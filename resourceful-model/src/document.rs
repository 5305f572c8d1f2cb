use crate::{status, ModelError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Field carrying the transient outcome code between engine layers.
pub const STATUS_FIELD: &str = "status";

/// Field holding the record identifier stamped by `get`.
pub const ID_FIELD: &str = "_id";

/// Field naming the document's resource type.
pub const RESOURCE_FIELD: &str = "resource";

/// An untyped key/value record representing a resource instance.
///
/// Serializes as a plain JSON object. The `status` field is not part of the
/// persisted record; it only travels between engine layers and is stripped
/// before documents are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Creates a document from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(ModelError::NotAnObject("null")),
            Value::Bool(_) => Err(ModelError::NotAnObject("a boolean")),
            Value::Number(_) => Err(ModelError::NotAnObject("a number")),
            Value::String(_) => Err(ModelError::NotAnObject("a string")),
            Value::Array(_) => Err(ModelError::NotAnObject("an array")),
        }
    }

    /// Parses a document from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Creates a document holding only a `status` field.
    pub fn with_status(code: u16) -> Self {
        let mut doc = Self::new();
        doc.set_status(code);
        doc
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    // ── Status ──────────────────────────────────────────────────────

    /// Returns the outcome code, if the field holds a code in `u16` range.
    /// Whole-valued floats such as `201.0` count as the same code.
    pub fn status(&self) -> Option<u16> {
        self.0.get(STATUS_FIELD).and_then(status_code)
    }

    pub fn set_status(&mut self, code: u16) {
        self.0.insert(STATUS_FIELD.to_string(), Value::from(code));
    }

    /// Strips the `status` field, returning the code it held.
    pub fn take_status(&mut self) -> Option<u16> {
        self.0.remove(STATUS_FIELD).as_ref().and_then(status_code)
    }

    /// Merges `{status: code}` under this document: an existing status wins.
    pub fn with_default_status(mut self, code: u16) -> Self {
        if !self.0.contains_key(STATUS_FIELD) {
            self.set_status(code);
        }
        self
    }

    /// Returns a new document carrying only this document's `status`, if any.
    pub fn status_only(&self) -> Self {
        let mut doc = Self::new();
        if let Some(code) = self.0.get(STATUS_FIELD) {
            doc.0.insert(STATUS_FIELD.to_string(), code.clone());
        }
        doc
    }

    /// Whether this document reports `200 OK` or `404 Not Found`.
    pub fn is_mergeable(&self) -> bool {
        matches!(self.status(), Some(status::OK) | Some(status::NOT_FOUND))
    }

    // ── Identity ────────────────────────────────────────────────────

    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Stamps `_id` with `id` unless the document already has one.
    pub fn ensure_id(&mut self, id: &str) {
        if !self.0.contains_key(ID_FIELD) {
            self.0.insert(ID_FIELD.to_string(), Value::from(id));
        }
    }

    /// Returns the resource type name, if present and a string.
    pub fn resource(&self) -> Option<&str> {
        self.0.get(RESOURCE_FIELD).and_then(Value::as_str)
    }

    // ── Merge ───────────────────────────────────────────────────────

    /// Shallow merge: every top-level field of `other` overwrites ours.
    pub fn merge(&mut self, other: Document) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Consuming form of [`Document::merge`].
    pub fn merged(mut self, other: Document) -> Self {
        self.merge(other);
        self
    }
}

/// Reads a status code from an integer or a whole-valued float in `u16` range.
fn status_code(value: &Value) -> Option<u16> {
    if let Some(code) = value.as_u64() {
        return u16::try_from(code).ok();
    }
    let code = value.as_f64()?;
    if code.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&code) {
        Some(code as u16)
    } else {
        None
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Document {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_value()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}
