//! Toast Notification Component
//!
//! Renders the single visible toast from the notification center.

use leptos::*;

use atithiverse::view::{self, Node};

use super::actions::{action_from_event, Action};
use crate::state::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();
    let toast = state.toast;

    let on_click = move |ev: ev::MouseEvent| {
        if action_from_event(&ev) == Some(Action::DismissToast) {
            state.page.notifications().dismiss();
        }
    };

    view! {
        <div
            class="notification-container position-fixed top-0 end-0 p-3"
            style="z-index: 9999; max-width: 400px;"
            on:click=on_click
            inner_html=move || {
                toast
                    .get()
                    .map(|n| Node::from(view::toast::toast(&n)).to_html())
                    .unwrap_or_default()
            }
        />
    }
}
