//! Client storage maintenance.
//!
//! The browser's `localStorage` is partitioned by key prefix into
//! [`StorageNamespace`]s. [`StorageMaintenance`] runs the administrative
//! operations over those namespaces: bulk cleanup, notification reset,
//! diagnostic snapshots, and the legacy-to-envelope migration of per-user
//! notification lists.

mod error;
mod maintenance;
mod namespace;
mod record;
mod store;

pub use error::{StorageError, StorageResult};
pub use maintenance::{CleanupReport, MigrationReport, StorageMaintenance, StorageSnapshot};
pub use namespace::{RecordSchema, StorageNamespace, ValueShape};
pub use record::{NotificationEnvelope, NotificationRecord, StoredValue, UserId};
pub use store::{BrowserStorage, KeyValueStore, MemoryStore, StorageArea};
