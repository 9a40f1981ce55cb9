//! Toast context and hook

use crate::toast::{Severity, TimeoutScheduler, Toast, ToastId, ToastManager};
use std::rc::Rc;
use yew::prelude::*;

/// What [`ToastProvider`](crate::components::ToastProvider) hands to consumers
#[derive(Clone, Debug)]
pub struct ToastContext {
    manager: ToastManager<TimeoutScheduler>,
    toasts: Rc<Vec<Toast>>,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        self.manager == other.manager
            && (Rc::ptr_eq(&self.toasts, &other.toasts) || self.toasts == other.toasts)
    }
}

impl ToastContext {
    pub(crate) fn new(manager: ToastManager<TimeoutScheduler>, toasts: Rc<Vec<Toast>>) -> Self {
        Self { manager, toasts }
    }

    /// Live toasts in display order
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn add_toast(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
    ) -> ToastId {
        self.manager.add_toast(message, severity, duration_ms)
    }

    /// Success toast with the default duration
    pub fn add_default(&self, message: impl Into<String>) -> ToastId {
        self.manager.add_default(message)
    }

    pub fn remove_toast(&self, id: &ToastId) {
        self.manager.remove_toast(id);
    }

    pub fn show_success(&self, message: impl Into<String>) -> ToastId {
        self.manager.show_success(message)
    }

    pub fn show_error(&self, message: impl Into<String>) -> ToastId {
        self.manager.show_error(message)
    }

    pub fn show_warning(&self, message: impl Into<String>) -> ToastId {
        self.manager.show_warning(message)
    }

    pub fn show_info(&self, message: impl Into<String>) -> ToastId {
        self.manager.show_info(message)
    }

    /// Callback suitable for a toast's `on_close`
    pub fn remove_callback(&self) -> Callback<ToastId> {
        let manager = self.manager.clone();
        Callback::from(move |id: ToastId| manager.remove_toast(&id))
    }
}

/// Hook to use the toast context
#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with ToastProvider")
}
