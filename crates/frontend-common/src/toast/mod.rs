//! Toast notifications.
//!
//! [`ToastManager`] owns the ordered list of live toasts and removes each
//! one after its duration plus the exit transition. [`ToastLifecycle`] is
//! the per-toast display state machine (visible, leaving, removed) that the
//! rendering components drive.

mod lifecycle;
mod manager;
mod model;
mod scheduler;

pub use lifecycle::{DisplayPhase, LifecycleEffect, LifecycleEvent, ToastLifecycle};
pub use manager::ToastManager;
pub use model::{Severity, Toast, ToastId};
pub use scheduler::{Scheduler, TimeoutScheduler};

#[cfg(test)]
pub(crate) use scheduler::manual::ManualScheduler;
