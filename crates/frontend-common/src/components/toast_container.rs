//! Fixed-position overlay holding the live toasts

use super::ToastItem;
use crate::hooks::use_toast;
use yew::prelude::*;

#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let toast = use_toast();
    let on_close = toast.remove_callback();

    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80 pointer-events-none">
            { for toast.toasts().iter().map(|item| html! {
                <ToastItem
                    key={item.id().as_str()}
                    toast={item.clone()}
                    on_close={on_close.clone()}
                />
            }) }
        </div>
    }
}
