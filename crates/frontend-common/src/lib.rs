//! Shared building blocks for the Civic ID web frontend.
//!
//! Two independent pieces live here:
//!
//! - [`toast`]: the notification toast manager and its display lifecycle
//! - [`storage`]: maintenance and migration of browser key-value storage
//!
//! The Yew [`components`] and [`hooks`] wire both into a running app.

pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod storage;
pub mod toast;

pub use components::{ToastContainer, ToastItem, ToastProvider};
pub use config::{StorageConfig, ToastConfig};
pub use hooks::{use_toast, ToastContext};
pub use storage::{
    BrowserStorage, KeyValueStore, MemoryStore, StorageError, StorageMaintenance,
    StorageNamespace, StorageSnapshot, StoredValue, UserId,
};
pub use toast::{Severity, Toast, ToastId, ToastLifecycle, ToastManager};
