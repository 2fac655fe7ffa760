//! Navigation Component
//!
//! Header navigation bar, scroll progress and the back-to-top button.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use atithiverse::effects::{anchor_scroll_target, ScrollState};

use crate::api::WebStorage;
use crate::state::use_global_state;

/// Current scroll geometry of the window
fn read_scroll() -> Option<ScrollState> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollState::at(offset, document, viewport))
}

/// Smooth-scroll to `#id`, keeping it clear of the fixed navbar
fn scroll_to_anchor(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
    window.scroll_to_with_x_and_y(0.0, anchor_scroll_target(top));
}

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();
    let user_name = state.user_name;
    let scroll = create_rw_signal(ScrollState::at(0.0, 0.0, 0.0));

    if let Some(window) = web_sys::window() {
        let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(next) = read_scroll() {
                scroll.set(next);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }

    let logout = move |_: ev::MouseEvent| {
        let state = state.clone();
        spawn_local(async move {
            let outcome = state.page.logout(&WebStorage).await;
            state.sync_user();
            gloo_timers::future::sleep(outcome.reload_after).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        });
    };

    view! {
        <div
            class="scroll-progress"
            style=move || format!("width: {:.1}%", scroll.get().progress)
        />
        <nav
            class="navbar navbar-expand-lg navbar-dark fixed-top"
            class:scrolled=move || scroll.get().navbar_scrolled
        >
            <div class="container">
                <A href="/" class="navbar-brand">
                    <i class="fas fa-om me-2" />
                    "AtithiVerse"
                </A>
                <ul class="navbar-nav ms-auto">
                    <NavLink href="/" label="Home" />
                    <AnchorLink target="destinations" label="Destinations" />
                    <AnchorLink target="weather" label="Weather" />
                    <AnchorLink target="newsletter" label="Newsletter" />
                    {move || match user_name.get() {
                        Some(name) => view! {
                            <li class="nav-item d-flex align-items-center">
                                <span class="navbar-text me-2">{format!("Namaste, {}", name)}</span>
                                <button class="btn btn-outline-light btn-sm" on:click=logout.clone()>
                                    "Logout"
                                </button>
                            </li>
                        }.into_view(),
                        None => view! {
                            <li class="nav-item">
                                <a class="nav-link" href="/login">"Login"</a>
                            </li>
                        }.into_view(),
                    }}
                </ul>
            </div>
        </nav>
        <button
            class="back-to-top btn btn-primary"
            class:show=move || scroll.get().back_to_top_visible
            on:click=move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
        >
            <i class="fas fa-arrow-up" />
        </button>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li class="nav-item">
            <A href=href class="nav-link" active_class="active">
                {label}
            </A>
        </li>
    }
}

/// Same-page section link
#[component]
fn AnchorLink(target: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li class="nav-item">
            <a
                class="nav-link"
                href=format!("#{}", target)
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_anchor(target);
                }
            >
                {label}
            </a>
        </li>
    }
}
