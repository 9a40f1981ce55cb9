//! Storage maintenance service hook

use crate::storage::{KeyValueStore, StorageMaintenance};
use std::rc::Rc;
use yew::prelude::*;

/// Maintenance service bound to the browser's storage areas
pub type BrowserMaintenance = StorageMaintenance<Rc<dyn KeyValueStore>>;

/// One maintenance service per component instance, opened on first render
#[hook]
pub fn use_storage_maintenance() -> Rc<BrowserMaintenance> {
    use_memo((), |_| StorageMaintenance::browser())
}
