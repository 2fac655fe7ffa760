//! Destination Grid Component
//!
//! Category filters and the card grid.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use atithiverse::destinations::view_destination_details;
use atithiverse::view;

use super::actions::{action_from_event, toggle_wishlist, Action};
use crate::state::use_global_state;

/// Filter buttons as (category, label)
const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("mustsees", "Must Sees"),
    ("cityviews", "City Views"),
    ("tours", "Tours"),
];

const FALLBACK_ATTR: &str = "data-fallback";

/// Placeholder to swap in for a card image that failed to load, once only
fn fallback_source(tag: &str, get: impl Fn(&str) -> Option<String>) -> Option<String> {
    if !tag.eq_ignore_ascii_case("img") {
        return None;
    }
    let fallback = get(FALLBACK_ATTR).filter(|f| !f.is_empty())?;
    if get("src").as_deref() == Some(fallback.as_str()) {
        return None;
    }
    Some(fallback)
}

/// Image `error` events don't bubble, so listen in the capture phase
fn install_image_fallback(target: &web_sys::EventTarget) {
    let handler = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if let Some(fallback) = fallback_source(&img.tag_name(), |name| img.get_attribute(name)) {
            let _ = img.remove_attribute(FALLBACK_ATTR);
            let _ = img.set_attribute("src", &fallback);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = target.add_event_listener_with_callback_and_bool(
        "error",
        handler.as_ref().unchecked_ref(),
        true,
    );
    handler.forget();
}

/// Destination grid with its filter bar
#[component]
pub fn DestinationGrid() -> impl IntoView {
    let state = use_global_state();
    let grid = state.grid;
    let active = create_rw_signal(state.page.search.active_category());
    let navigate = use_navigate();
    let cards = create_node_ref::<html::Div>();

    create_effect(move |installed: Option<bool>| {
        if installed == Some(true) {
            return true;
        }
        match cards.get() {
            Some(div) => {
                install_image_fallback(&div);
                true
            }
            None => false,
        }
    });

    let select = {
        let state = state.clone();
        move |category: &'static str| {
            active.set(category.to_string());
            let state = state.clone();
            spawn_local(async move {
                let surface = state.grid_surface();
                state
                    .page
                    .search
                    .select_category(category, &state.page.grid, &surface)
                    .await;
            });
        }
    };

    let on_click = move |ev: ev::MouseEvent| {
        let Some(action) = action_from_event(&ev) else {
            return;
        };
        match action {
            Action::Reload => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
            Action::ViewDetails(id) => {
                if let Some(path) = view_destination_details(id, &**state.page.notifications()) {
                    navigate(&path, Default::default());
                }
            }
            Action::Wishlist {
                destination_id,
                saved,
            } => toggle_wishlist(state.clone(), destination_id, saved, |_| {}),
            _ => {}
        }
    };

    view! {
        <section id="destinations" class="destinations-section py-5">
            <div class="container">
                <h2 class="section-title text-center">"Explore Incredible India"</h2>
                <div class="destination-filters text-center mb-4">
                    {FILTERS
                        .iter()
                        .map(|&(category, label)| {
                            let select = select.clone();
                            view! {
                                <button
                                    class="btn filter-btn"
                                    class:active=move || active.get() == category
                                    data-category=category
                                    on:click=move |_| select(category)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    class="row"
                    id="destinationsGrid"
                    node_ref=cards
                    on:click=on_click
                    inner_html=move || view::cards::grid(&grid.get()).to_html()
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(attrs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_broken_card_image_gets_fallback() {
        let attrs = [
            ("src", "https://cdn.example/missing.jpg"),
            (FALLBACK_ATTR, "https://placehold.co/400x250/f8f9fa/6c757d?text=Image%20Error"),
        ];
        assert_eq!(
            fallback_source("IMG", lookup(&attrs)).as_deref(),
            Some("https://placehold.co/400x250/f8f9fa/6c757d?text=Image%20Error")
        );
    }

    #[test]
    fn test_fallback_is_not_retried() {
        let on_fallback = [("src", "https://placehold.co/x"), (FALLBACK_ATTR, "https://placehold.co/x")];
        assert_eq!(fallback_source("IMG", lookup(&on_fallback)), None);

        let no_fallback = [("src", "https://cdn.example/missing.jpg")];
        assert_eq!(fallback_source("IMG", lookup(&no_fallback)), None);

        let script = [(FALLBACK_ATTR, "https://placehold.co/x")];
        assert_eq!(fallback_source("SCRIPT", lookup(&script)), None);
    }
}
