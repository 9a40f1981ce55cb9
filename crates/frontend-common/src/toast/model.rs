//! Toast value types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Presentation style of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    /// Anything unrecognized; rendered with neutral styling
    #[serde(other)]
    Other,
}

impl Severity {
    /// Lenient, case-insensitive parse that never fails
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            _ => Self::Other,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Other => "other",
        }
    }

    /// Tailwind classes for the toast card
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-50 dark:bg-green-900/30 border-green-500 text-green-800 dark:text-green-200",
            Self::Error => "bg-red-50 dark:bg-red-900/30 border-red-500 text-red-800 dark:text-red-200",
            Self::Warning => "bg-yellow-50 dark:bg-yellow-900/30 border-yellow-500 text-yellow-800 dark:text-yellow-200",
            Self::Info => "bg-blue-50 dark:bg-blue-900/30 border-blue-500 text-blue-800 dark:text-blue-200",
            Self::Other => "bg-gray-50 dark:bg-gray-800 border-gray-400 text-gray-800 dark:text-gray-200",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2715}",
            Self::Warning => "\u{26a0}",
            Self::Info | Self::Other => "\u{2139}",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Toast identifier: creation time in milliseconds plus a random suffix
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(String);

impl ToastId {
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let random = Uuid::new_v4().simple().to_string();
        Self(format!("{millis}-{}", &random[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A notification message. Never changes once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    severity: Severity,
    duration_ms: u32,
}

impl Toast {
    pub fn new(id: ToastId, message: impl Into<String>, severity: Severity, duration_ms: u32) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            duration_ms,
        }
    }

    pub fn id(&self) -> &ToastId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// How long the toast stays visible before its exit transition
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}
