//! Invocation event and object locator

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ImportError, ImportResult};

/// Where the CSV input lives: a container (bucket, directory) and a key inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectLocator {
    pub container: String,
    pub key: String,
}

impl ObjectLocator {
    pub fn new(container: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ObjectLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.key)
    }
}

/// An import invocation.
///
/// Shape on the wire:
/// `{ "number": <any>, "file_name": { "bucket": { "name": "…" }, "object": { "key": "…" } } }`.
/// `number` is an opaque correlation id and is echoed back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportEvent {
    pub number: Value,
    pub locator: ObjectLocator,
}

impl ImportEvent {
    /// Read an event from its JSON form.
    ///
    /// A missing `number` becomes `null`; a missing or non-string bucket name
    /// or object key is an [`ImportError::InvalidEvent`].
    pub fn from_value(event: &Value) -> ImportResult<Self> {
        let bucket = string_at(event, "/file_name/bucket/name", "file_name.bucket.name")?;
        let key = string_at(event, "/file_name/object/key", "file_name.object.key")?;

        Ok(Self {
            number: correlation_id(event),
            locator: ObjectLocator::new(bucket, key),
        })
    }
}

/// The `number` field of an event, or `null`.
pub fn correlation_id(event: &Value) -> Value {
    event.get("number").cloned().unwrap_or(Value::Null)
}

fn string_at<'a>(event: &'a Value, pointer: &str, field: &str) -> ImportResult<&'a str> {
    event
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ImportError::InvalidEvent {
            field: field.to_string(),
        })
}
