//! Per-toast display state machine

use crate::config::ToastConfig;

/// Where a toast is in its on-screen life
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DisplayPhase {
    #[default]
    Visible,
    /// Exit transition running
    Leaving,
    /// Terminal; the owner has been told to discard the toast
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The visibility timer fired
    Expired,
    /// The user closed the toast
    Dismissed,
    /// The exit transition finished
    TransitionElapsed,
}

/// What the driver must do after a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEffect {
    /// Start the exit animation and fire `TransitionElapsed` after `delay_ms`
    StartExitTransition { delay_ms: u32 },
    /// Invoke the close callback
    NotifyClosed,
    Nothing,
}

/// Visible → Leaving → Removed.
///
/// Expiry and dismissal both move a visible toast to `Leaving`; whichever
/// comes second is ignored, so `NotifyClosed` is produced exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ToastLifecycle {
    phase: DisplayPhase,
}

impl ToastLifecycle {
    pub const fn new() -> Self {
        Self {
            phase: DisplayPhase::Visible,
        }
    }

    pub const fn phase(&self) -> DisplayPhase {
        self.phase
    }

    pub fn handle(&mut self, event: LifecycleEvent) -> LifecycleEffect {
        match (self.phase, event) {
            (DisplayPhase::Visible, LifecycleEvent::Expired | LifecycleEvent::Dismissed) => {
                self.phase = DisplayPhase::Leaving;
                LifecycleEffect::StartExitTransition {
                    delay_ms: ToastConfig::TRANSITION_MS,
                }
            }
            (DisplayPhase::Leaving, LifecycleEvent::TransitionElapsed) => {
                self.phase = DisplayPhase::Removed;
                LifecycleEffect::NotifyClosed
            }
            _ => LifecycleEffect::Nothing,
        }
    }

    /// The one timer a phase needs: its delay and the event it delivers
    pub const fn timer_for(phase: DisplayPhase, duration_ms: u32) -> Option<(u32, LifecycleEvent)> {
        match phase {
            DisplayPhase::Visible => Some((duration_ms, LifecycleEvent::Expired)),
            DisplayPhase::Leaving => Some((
                ToastConfig::TRANSITION_MS,
                LifecycleEvent::TransitionElapsed,
            )),
            DisplayPhase::Removed => None,
        }
    }
}
