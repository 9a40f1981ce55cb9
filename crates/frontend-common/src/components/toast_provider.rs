//! Toast context provider

use super::ToastContainer;
use crate::hooks::ToastContext;
use crate::toast::{TimeoutScheduler, Toast, ToastManager};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Owns the app's [`ToastManager`] and renders its overlay.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let manager = use_memo((), |_| ToastManager::new(TimeoutScheduler));
    let toasts = use_state(|| Rc::new(Vec::<Toast>::new()));

    // Mirror the manager's list into component state so consumers re-render
    {
        let manager = manager.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            manager.set_listener(move |current| toasts.set(Rc::new(current.to_vec())));

            move || {
                manager.clear_listener();
                manager.clear();
            }
        });
    }

    let context = ToastContext::new((*manager).clone(), (*toasts).clone());

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastContainer />
        </ContextProvider<ToastContext>>
    }
}
