//! Stored value shapes

use crate::config::StorageConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Owner of per-user storage keys.
///
/// Serialized untagged, so a numeric id stays a JSON number inside an
/// envelope and a textual id stays a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

impl UserId {
    /// Parse free-form input, preferring the numeric form.
    ///
    /// Only canonical integers become numeric: `"007"` or `"+42"` would
    /// print back differently and address another user's keys.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(id) if id.to_string() == trimmed => Self::Numeric(id),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Numeric(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self::Numeric(i64::from(id))
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self::Numeric(i64::from(id))
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Version 2.0 wrapper around a notification id list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEnvelope {
    pub data: Vec<Value>,
    /// Milliseconds since the Unix epoch at migration time
    pub timestamp: i64,
    pub user_id: UserId,
    pub migrated: bool,
    pub version: String,
}

impl NotificationEnvelope {
    /// Wrap a legacy list for `user_id`
    pub fn wrap(data: Vec<Value>, user_id: UserId, timestamp: i64) -> Self {
        Self {
            data,
            timestamp,
            user_id,
            migrated: true,
            version: StorageConfig::ENVELOPE_VERSION.to_string(),
        }
    }
}

/// A decoded per-user notification list
#[derive(Clone, Debug, PartialEq)]
pub enum NotificationRecord {
    /// Bare array written before the envelope existed
    Legacy(Vec<Value>),
    Envelope(NotificationEnvelope),
    /// Not JSON, or JSON of neither known shape
    Unknown,
}

impl NotificationRecord {
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(ids)) => Self::Legacy(ids),
            Ok(value @ Value::Object(_)) => serde_json::from_value(value)
                .map_or(Self::Unknown, Self::Envelope),
            Ok(_) | Err(_) => Self::Unknown,
        }
    }
}

/// A storage value as shown in a diagnostic snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredValue {
    Json(Value),
    /// Kept verbatim because it is not valid JSON
    Raw(String),
}

impl StoredValue {
    pub fn decode(raw: &str) -> Self {
        serde_json::from_str(raw).map_or_else(|_| Self::Raw(raw.to_string()), Self::Json)
    }

    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Raw(text) => f.write_str(text),
        }
    }
}
