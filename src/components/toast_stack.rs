//! Toast Stack

use leptos::prelude::*;

use crate::context::use_controller;
use crate::store::UiStateStoreFields;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctrl = use_controller();
    let toasts = ctrl.store.toasts();

    view! {
        <div id="toast-container">
            <For
                each=move || toasts.with(|list| list.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = toast.class();
                    // Only the fade style changes after a toast appears
                    let style = move || toasts.with(|list| list.get(id).map(|t| t.style()).unwrap_or(""));
                    view! {
                        <div class=class style=style>{toast.message}</div>
                    }
                }
            />
        </div>
    }
}
