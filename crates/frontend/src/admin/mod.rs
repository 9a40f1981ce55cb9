//! Developer and administrator tools

mod storage_panel;

pub use storage_panel::StorageAdminPanel;
