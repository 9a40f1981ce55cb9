//! Registry of live toasts

use super::model::{Severity, Toast, ToastId};
use super::scheduler::Scheduler;
use crate::config::ToastConfig;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

type Listener = Rc<dyn Fn(&[Toast])>;

struct Inner<S: Scheduler> {
    scheduler: S,
    /// Insertion order is display order
    toasts: RefCell<Vec<Toast>>,
    /// One pending removal per live toast
    removals: RefCell<HashMap<ToastId, S::Handle>>,
    listener: RefCell<Option<Listener>>,
}

/// Ordered collection of live toasts with automatic expiry.
///
/// Every toast is removed `duration_ms + ToastConfig::TRANSITION_MS` after
/// it was added unless [`remove_toast`](Self::remove_toast) gets there
/// first, in which case the pending removal is cancelled. Clones share the
/// same collection.
pub struct ToastManager<S: Scheduler> {
    inner: Rc<Inner<S>>,
}

impl<S: Scheduler> Clone for ToastManager<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Scheduler> PartialEq for ToastManager<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: Scheduler> fmt::Debug for ToastManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastManager")
            .field("toasts", &self.inner.toasts.borrow())
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler + 'static> ToastManager<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                toasts: RefCell::new(Vec::new()),
                removals: RefCell::new(HashMap::new()),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Called with the full list after every change
    pub fn set_listener(&self, listener: impl Fn(&[Toast]) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn clear_listener(&self) {
        self.inner.listener.borrow_mut().take();
    }

    /// Append a toast and schedule its removal.
    pub fn add_toast(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
    ) -> ToastId {
        let id = self.unique_id();
        self.inner
            .toasts
            .borrow_mut()
            .push(Toast::new(id.clone(), message, severity, duration_ms));

        let delay = duration_ms.saturating_add(ToastConfig::TRANSITION_MS);
        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        let expired = id.clone();
        let handle = self.inner.scheduler.schedule(delay, move || {
            if let Some(inner) = weak.upgrade() {
                debug!(id = %expired, "Toast expired");
                Self { inner }.remove_toast(&expired);
            }
        });
        self.inner.removals.borrow_mut().insert(id.clone(), handle);

        debug!(id = %id, %severity, duration_ms, "Toast added");
        self.notify();
        id
    }

    /// Success toast with the default duration
    pub fn add_default(&self, message: impl Into<String>) -> ToastId {
        self.add_toast(message, Severity::default(), ToastConfig::DEFAULT_DURATION_MS)
    }

    /// Remove a toast and cancel its pending removal. Unknown ids are ignored.
    pub fn remove_toast(&self, id: &ToastId) {
        let pending = self.inner.removals.borrow_mut().remove(id);
        drop(pending);

        let removed = {
            let mut toasts = self.inner.toasts.borrow_mut();
            let before = toasts.len();
            toasts.retain(|toast| toast.id() != id);
            toasts.len() != before
        };

        if removed {
            debug!(id = %id, "Toast removed");
            self.notify();
        }
    }

    pub fn show_success(&self, message: impl Into<String>) -> ToastId {
        self.add_toast(message, Severity::Success, ToastConfig::DEFAULT_DURATION_MS)
    }

    pub fn show_error(&self, message: impl Into<String>) -> ToastId {
        self.add_toast(message, Severity::Error, ToastConfig::DEFAULT_DURATION_MS)
    }

    pub fn show_warning(&self, message: impl Into<String>) -> ToastId {
        self.add_toast(message, Severity::Warning, ToastConfig::DEFAULT_DURATION_MS)
    }

    pub fn show_info(&self, message: impl Into<String>) -> ToastId {
        self.add_toast(message, Severity::Info, ToastConfig::DEFAULT_DURATION_MS)
    }

    /// Remove every toast and cancel all pending removals
    pub fn clear(&self) {
        let pending = std::mem::take(&mut *self.inner.removals.borrow_mut());
        drop(pending);

        let had_toasts = {
            let mut toasts = self.inner.toasts.borrow_mut();
            let had_toasts = !toasts.is_empty();
            toasts.clear();
            had_toasts
        };

        if had_toasts {
            self.notify();
        }
    }

    /// Live toasts in display order
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    pub fn contains(&self, id: &ToastId) -> bool {
        self.inner.toasts.borrow().iter().any(|toast| toast.id() == id)
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.toasts.borrow().is_empty()
    }

    fn unique_id(&self) -> ToastId {
        loop {
            let id = ToastId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn notify(&self) {
        // No borrow may be held while the listener runs; it can call back in
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            let snapshot = self.toasts();
            listener(&snapshot);
        }
    }
}
