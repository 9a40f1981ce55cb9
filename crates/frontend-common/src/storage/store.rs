//! Key-value store backends

use super::error::{StorageError, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

/// A string-to-string store with the shape of the Web Storage API.
pub trait KeyValueStore {
    /// Snapshot of every key currently present.
    fn keys(&self) -> StorageResult<Vec<String>>;

    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    fn clear(&self) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn keys(&self) -> StorageResult<Vec<String>> {
        (**self).keys()
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }
}

/// In-memory store.
///
/// Clones share the same entries, so a test can keep one handle while a
/// [`StorageMaintenance`](super::StorageMaintenance) owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// Which Web Storage area a [`BrowserStorage`] wraps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

/// `localStorage` or `sessionStorage` of the current window
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
    area: StorageArea,
}

impl BrowserStorage {
    /// Durable `localStorage`
    pub fn local() -> StorageResult<Self> {
        Self::open(StorageArea::Local)
    }

    /// Tab-scoped `sessionStorage`
    pub fn session() -> StorageResult<Self> {
        Self::open(StorageArea::Session)
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    fn open(area: StorageArea) -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;

        let storage = match area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        }
        .map_err(|e| StorageError::Unavailable(js_error_message(&e)))?
        .ok_or_else(|| StorageError::Unavailable(format!("{area:?} storage is disabled")))?;

        Ok(Self { storage, area })
    }
}

impl KeyValueStore for BrowserStorage {
    fn keys(&self) -> StorageResult<Vec<String>> {
        let length = self.storage.length().map_err(access_error)?;
        let mut keys = Vec::with_capacity(length as usize);
        for index in 0..length {
            if let Some(key) = self.storage.key(index).map_err(access_error)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(access_error)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(access_error)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key).map_err(access_error)
    }

    fn clear(&self) -> StorageResult<()> {
        self.storage.clear().map_err(access_error)
    }
}

#[allow(clippy::needless_pass_by_value)]
fn access_error(value: JsValue) -> StorageError {
    StorageError::Access(js_error_message(&value))
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
