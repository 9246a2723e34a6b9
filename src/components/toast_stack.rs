//! Toast Stack Component
//!
//! Renders the notifier store as Bootstrap alerts.

use leptos::prelude::*;

use crate::notifier::dismiss;
use crate::store::{store_is_leaving, store_toasts, NotifierStore, Toast};

const TOAST_STYLE: &str =
    "position: fixed; top: 100px; right: 20px; z-index: 1060; max-width: 400px; animation: slideInRight 0.5s ease;";

/// All live toasts, in append order
#[component]
pub fn ToastStack(store: NotifierStore) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast store=store /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, store: NotifierStore) -> impl IntoView {
    let Toast { id, message, severity, .. } = toast;
    let variant = severity.alert_variant();

    // Dropping `show` starts the fade-out
    let class = move || {
        if store_is_leaving(&store, id) {
            format!("alert alert-{} alert-dismissible fade", variant)
        } else {
            format!("alert alert-{} alert-dismissible fade show", variant)
        }
    };

    view! {
        <div class=class role="alert" style=TOAST_STYLE>
            <i class=format!("fas fa-{} me-2", severity.icon())></i>
            {message}
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| dismiss(store, id)
            ></button>
        </div>
    }
}
