//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="text-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}

/// Page-load overlay, hidden once initial content is in place
#[component]
pub fn LoadingOverlay(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="loading-overlay"
            class:d-none=move || !loading.get()
        >
            <div class="spinner-border text-light" role="status" />
        </div>
    }
}
