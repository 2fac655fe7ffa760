//! Chat Widget Component
//!
//! Floating AtithiBot panel.

use leptos::*;

use atithiverse::chat::Speaker;
use atithiverse::view::{self, Node};

use super::actions::{action_from_event, Action};
use crate::state::use_global_state;

const WELCOME: &str = "Namaste! I'm **AtithiBot**, your travel companion for Incredible India. \
Ask me about destinations, the best time to visit or local food.";

/// Chat toggle button and panel
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = use_global_state();
    let log = state.chat_log;
    let typing = state.typing;
    let connected = state.chat_connected;
    let quick_actions = state.quick_actions;
    let input_enabled = state.chat_input_enabled;

    let (open, set_open) = create_signal(false);
    let (draft, set_draft) = create_signal(String::new());
    let messages = create_node_ref::<html::Div>();

    // Keep the newest message in view
    create_effect(move |_| {
        log.with(|_| ());
        typing.with(|_| ());
        if let Some(div) = messages.get() {
            div.set_scroll_top(div.scroll_height());
        }
    });

    let send = {
        let state = state.clone();
        move |text: String| {
            let state = state.clone();
            spawn_local(async move {
                let surface = state.chat_surface();
                state.page.chat.send(&text, &surface).await;
            });
        }
    };

    let toggle = {
        let state = state.clone();
        move |_: ev::MouseEvent| {
            let opening = !open.get_untracked();
            set_open.set(opening);
            if opening {
                let state = state.clone();
                spawn_local(async move {
                    let surface = state.chat_surface();
                    state.page.chat.open_panel(&surface).await;
                });
            }
        }
    };

    let on_submit = {
        let send = send.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let text = draft.get_untracked();
            if text.trim().is_empty() {
                return;
            }
            set_draft.set(String::new());
            send(text);
        }
    };

    let on_quick_action = move |ev: ev::MouseEvent| {
        if let Some(Action::QuickAction(text)) = action_from_event(&ev) {
            send(text);
        }
    };

    let opened_at = chrono::Local::now();
    let transcript = move || {
        let welcome = view::chat::message(Speaker::Bot, WELCOME, opened_at);
        let mut html = Node::from(welcome).to_html();
        for line in log.get() {
            html.push_str(&Node::from(view::chat::message(line.speaker, &line.text, line.at)).to_html());
        }
        if let Some(label) = typing.get() {
            html.push_str(&Node::from(view::chat::typing_indicator(&label)).to_html());
        }
        html
    };

    view! {
        <button class="chat-toggle btn btn-primary rounded-circle" on:click=toggle.clone()>
            <i class=move || if open.get() { "fas fa-times" } else { "fas fa-comments" } />
        </button>
        <div class="chat-widget" class:d-none=move || !open.get()>
            <div class="chat-header d-flex justify-content-between align-items-center">
                <div>
                    <strong>"AtithiBot"</strong>
                    <span inner_html=move || Node::from(view::chat::connection_badge(connected.get())).to_html() />
                </div>
                <button class="btn-close btn-close-white" on:click=toggle />
            </div>
            <div class="chat-messages" node_ref=messages inner_html=transcript />
            <div
                on:click=on_quick_action
                inner_html=move || Node::from(view::chat::quick_actions(&quick_actions.get())).to_html()
            />
            <form class="chat-input d-flex" on:submit=on_submit>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Ask about destinations, food, festivals..."
                    prop:value=move || draft.get()
                    prop:disabled=move || !input_enabled.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary ms-2" disabled=move || !input_enabled.get()>
                    <i class="fas fa-paper-plane" />
                </button>
            </form>
        </div>
    }
}
