//! Custom hooks for the application

pub mod use_storage_maintenance;
pub mod use_toast;

pub use use_storage_maintenance::{use_storage_maintenance, BrowserMaintenance};
pub use use_toast::{use_toast, ToastContext};
