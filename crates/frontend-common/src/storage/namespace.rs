//! Key-prefix namespaces of the application's storage

use std::fmt;

use super::record::UserId;

/// Shape of a stored value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueShape {
    /// Bare JSON array of notification ids
    IdList,
    /// `{ data, timestamp, userId, migrated, version: "2.0" }`
    EnvelopeV2,
    /// Milliseconds since the Unix epoch
    Timestamp,
    /// Owned by another part of the app; never decoded here
    Opaque,
}

/// Declared value shapes of a namespace
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordSchema {
    /// Shape written by older app versions, if the namespace was ever migrated
    pub legacy: Option<ValueShape>,
    pub current: ValueShape,
}

impl RecordSchema {
    pub const fn is_migratable(&self) -> bool {
        self.legacy.is_some()
    }
}

/// A reserved key prefix of the application's storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageNamespace {
    ReadNotifications,
    ClearedNotifications,
    LastCleanup,
    Session,
    Auth,
}

impl StorageNamespace {
    /// Every reserved namespace
    pub const ALL: [Self; 5] = [
        Self::ReadNotifications,
        Self::ClearedNotifications,
        Self::LastCleanup,
        Self::Session,
        Self::Auth,
    ];

    /// Namespaces holding notification state
    pub const NOTIFICATIONS: [Self; 3] = [
        Self::ReadNotifications,
        Self::ClearedNotifications,
        Self::LastCleanup,
    ];

    /// Per-user notification lists that carry a legacy shape
    pub const MIGRATABLE: [Self; 2] = [Self::ReadNotifications, Self::ClearedNotifications];

    pub const fn prefix(self) -> &'static str {
        match self {
            Self::ReadNotifications => "read_notifications_",
            Self::ClearedNotifications => "cleared_notifications_",
            Self::LastCleanup => "notification_last_cleanup_",
            Self::Session => "session_",
            Self::Auth => "auth_",
        }
    }

    pub const fn schema(self) -> RecordSchema {
        match self {
            Self::ReadNotifications | Self::ClearedNotifications => RecordSchema {
                legacy: Some(ValueShape::IdList),
                current: ValueShape::EnvelopeV2,
            },
            Self::LastCleanup => RecordSchema {
                legacy: None,
                current: ValueShape::Timestamp,
            },
            Self::Session | Self::Auth => RecordSchema {
                legacy: None,
                current: ValueShape::Opaque,
            },
        }
    }

    pub const fn is_notification(self) -> bool {
        matches!(
            self,
            Self::ReadNotifications | Self::ClearedNotifications | Self::LastCleanup
        )
    }

    /// The namespace owning `key`, if any.
    ///
    /// Prefixes do not overlap, so at most one namespace matches.
    pub fn classify(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|namespace| key.starts_with(namespace.prefix()))
    }

    /// Storage key of this namespace for one user, e.g. `read_notifications_42`
    pub fn user_key(self, user_id: &UserId) -> String {
        format!("{}{user_id}", self.prefix())
    }
}

impl fmt::Display for StorageNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches('_'))
    }
}
