//! App Root Component
//!
//! Main application component with routing, page start-up and global error
//! hooks.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use atithiverse::page::UnhandledError;

use crate::components::{ChatWidget, LoadingOverlay, Nav, Toast};
use crate::pages::{DestinationPage, Home};
use crate::state::{provide_global_state, use_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_global_state();
    let loading = create_rw_signal(true);

    install_error_hooks(&state);
    start_page(state.clone(), loading);

    let page = state.page.clone();
    on_cleanup(move || page.teardown());

    view! {
        <Router>
            <LoadingOverlay loading=loading />
            <Nav />
            <main>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/destination/:id" view=DestinationPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
            <Footer />
            <ChatWidget />
            <Toast />
        </Router>
    }
}

/// Restore the session, fill the grid, probe chat, then load default weather
fn start_page(state: GlobalState, loading: RwSignal<bool>) {
    spawn_local(async move {
        let grid = state.grid_surface();
        let chat = state.chat_surface();
        state.page.init(&grid, &chat).await;
        state.sync_user();

        state.page.finish_loading();
        loading.set(false);

        let weather = state.weather;
        let on_loading = |s: &atithiverse::weather::WeatherState| weather.set(s.clone());
        let ready = state.page.load_default_weather(&on_loading).await;
        weather.set(ready);
    });
}

/// Route window-level errors to the page's toast
fn install_error_hooks(state: &GlobalState) {
    let Some(window) = web_sys::window() else {
        return;
    };

    for (event, kind) in [
        ("error", UnhandledError::Error),
        ("unhandledrejection", UnhandledError::Rejection),
    ] {
        let page = state.page.clone();
        let handler = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let detail = ev
                .dyn_ref::<web_sys::ErrorEvent>()
                .map(|e| e.message())
                .unwrap_or_else(|| ev.type_());
            web_sys::console::error_1(&format!("Unhandled {}: {}", event, detail).into());
            page.report_unhandled(kind, &detail);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = window.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        handler.forget();
    }
}

/// Footer with links and the signed-in name
#[component]
fn Footer() -> impl IntoView {
    let state = use_global_state();

    view! {
        <footer class="footer bg-dark text-white py-4 mt-5">
            <div class="container d-flex justify-content-between">
                <span>"© AtithiVerse. Atithi Devo Bhava."</span>
                <span class="text-muted">
                    {move || {
                        state
                            .user_name
                            .get()
                            .map(|name| format!("Signed in as {}", name))
                            .unwrap_or_else(|| "Browsing as guest".to_string())
                    }}
                </span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container text-center py-5 mt-5">
            <div class="display-1 mb-3">"🧭"</div>
            <h1 class="mb-2">"Page Not Found"</h1>
            <p class="text-muted mb-4">"This path doesn't lead anywhere in India yet."</p>
            <A href="/" class="btn btn-primary">
                "Back to Home"
            </A>
        </div>
    }
}
