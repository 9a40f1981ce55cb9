//! A single toast card

use crate::toast::{
    DisplayPhase, LifecycleEffect, LifecycleEvent, Toast, ToastId, ToastLifecycle,
};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    /// Fired once, after the exit transition
    pub on_close: Callback<ToastId>,
}

/// Renders one toast and drives its [`ToastLifecycle`].
///
/// Exactly one timer is alive per phase; changing phase drops the previous
/// timer, which is how a dismissal cancels the pending expiry.
///
/// The manager's own removal is scheduled when the toast is added, while
/// this card's expiry timer starts at mount. On auto-expiry the manager
/// therefore unmounts the card just before `TransitionElapsed`, so
/// `on_close` only runs on the dismiss path and the exit animation is cut
/// at its very end.
#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    let lifecycle = use_mut_ref(ToastLifecycle::new);
    let phase = use_state(|| DisplayPhase::Visible);

    let dispatch = {
        let lifecycle = lifecycle.clone();
        let phase = phase.clone();
        let on_close = props.on_close.clone();
        let id = props.toast.id().clone();
        Callback::from(move |event: LifecycleEvent| {
            let effect = lifecycle.borrow_mut().handle(event);
            let current = lifecycle.borrow().phase();
            phase.set(current);
            if effect == LifecycleEffect::NotifyClosed {
                on_close.emit(id.clone());
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        let duration_ms = props.toast.duration_ms();
        use_effect_with(*phase, move |phase| {
            let timer = ToastLifecycle::timer_for(*phase, duration_ms)
                .map(|(delay, event)| Timeout::new(delay, move || dispatch.emit(event)));

            move || drop(timer)
        });
    }

    if *phase == DisplayPhase::Removed {
        return html! {};
    }

    let on_dismiss = dispatch.reform(|_: MouseEvent| LifecycleEvent::Dismissed);
    let severity = props.toast.severity();
    let motion = if *phase == DisplayPhase::Leaving {
        "opacity-0 translate-x-4"
    } else {
        "opacity-100 translate-x-0"
    };

    html! {
        <div
            role="status"
            class={classes!(
                "pointer-events-auto", "flex", "items-start", "gap-3", "p-4",
                "border-l-4", "rounded-lg", "shadow-lg",
                "transition-all", "duration-300", "ease-in-out",
                severity.css_class(), motion
            )}
        >
            <span class="text-lg leading-none" aria-hidden="true">{severity.icon()}</span>
            <p class="flex-1 text-sm m-0">{props.toast.message()}</p>
            <button
                onclick={on_dismiss}
                aria-label="Dismiss notification"
                class="text-current opacity-60 hover:opacity-100 transition-opacity"
            >
                {"\u{2715}"}
            </button>
        </div>
    }
}
