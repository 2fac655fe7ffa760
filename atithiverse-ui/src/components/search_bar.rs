//! Search Bar Component
//!
//! Destination search form with debounced autocomplete.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use atithiverse::destinations::{min_search_date, SearchForm, SuggestionBox};
use atithiverse::view;

use super::actions::{action_from_event, Action};
use crate::state::use_global_state;

const GUEST_OPTIONS: &[&str] = &["1 Guest", "2 Guests", "3 Guests", "4+ Guests"];

/// Hero search form
#[component]
pub fn SearchBar() -> impl IntoView {
    let state = use_global_state();

    let (destination, set_destination) = create_signal(String::new());
    let (date, set_date) = create_signal(min_search_date());
    let (guests, set_guests) = create_signal(GUEST_OPTIONS[1].to_string());
    let suggestions = create_rw_signal(SuggestionBox::Hidden);
    let container = create_node_ref::<html::Div>();

    // Clicks outside the search box close the suggestions
    if let Some(window) = web_sys::window() {
        let state = state.clone();
        let on_document_click = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let inside = match (container.get_untracked(), ev.target()) {
                (Some(div), Some(target)) => target
                    .dyn_ref::<web_sys::Node>()
                    .map_or(false, |node| div.contains(Some(node))),
                _ => false,
            };
            if !inside {
                state.page.search.hide_suggestions();
                suggestions.set(SuggestionBox::Hidden);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = window.add_event_listener_with_callback("click", on_document_click.as_ref().unchecked_ref());
        on_document_click.forget();
    }

    let on_input = {
        let state = state.clone();
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            set_destination.set(text.clone());
            let state = state.clone();
            spawn_local(async move {
                if let Some(next) = state.page.search.input_changed(&text).await {
                    suggestions.set(next);
                }
            });
        }
    };

    let on_keydown = {
        let state = state.clone();
        move |ev: ev::KeyboardEvent| {
            if ev.key() == "Escape" {
                state.page.search.hide_suggestions();
                suggestions.set(SuggestionBox::Hidden);
            }
        }
    };

    let on_pick = {
        let state = state.clone();
        move |ev: ev::MouseEvent| {
            let Some(Action::PickSuggestion(title)) = action_from_event(&ev) else {
                return;
            };
            let SuggestionBox::Shown(items) = state.page.search.suggestions() else {
                return;
            };
            if let Some(item) = items.iter().find(|s| s.title == title) {
                set_destination.set(state.page.search.pick_suggestion(item));
                suggestions.set(SuggestionBox::Hidden);
            }
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = SearchForm {
            destination: destination.get_untracked(),
            date: date.get_untracked(),
            guests: guests.get_untracked(),
        };
        suggestions.set(SuggestionBox::Hidden);

        let state = state.clone();
        spawn_local(async move {
            let surface = state.grid_surface();
            let searched = state
                .page
                .search
                .perform_search(&form, &state.page.grid, &surface)
                .await;
            if searched.is_some() {
                scroll_to_results();
            }
        });
    };

    view! {
        <form class="search-form row g-2" on:submit=on_submit>
            <div class="col-md-5 search-container position-relative" node_ref=container>
                <input
                    type="text"
                    id="searchDestination"
                    class="form-control"
                    placeholder="Where do you want to go?"
                    autocomplete="off"
                    prop:value=move || destination.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <div
                    on:click=on_pick
                    inner_html=move || match suggestions.get() {
                        SuggestionBox::Shown(items) => view::cards::search_suggestions(&items).to_html(),
                        SuggestionBox::Hidden => String::new(),
                    }
                />
            </div>
            <div class="col-md-3">
                <input
                    type="date"
                    id="searchDate"
                    class="form-control"
                    min=min_search_date().format("%Y-%m-%d").to_string()
                    prop:value=move || date.get().format("%Y-%m-%d").to_string()
                    on:change=move |ev| {
                        if let Ok(picked) = chrono::NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                            set_date.set(picked);
                        }
                    }
                />
            </div>
            <div class="col-md-2">
                <select
                    id="searchGuests"
                    class="form-select"
                    on:change=move |ev| set_guests.set(event_target_value(&ev))
                >
                    {GUEST_OPTIONS
                        .iter()
                        .map(|&option| view! {
                            <option value=option selected=move || guests.get() == option>{option}</option>
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="col-md-2">
                <button type="submit" class="btn btn-primary w-100">
                    <i class="fas fa-search me-1" />
                    "Search"
                </button>
            </div>
        </form>
    }
}

fn scroll_to_results() {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("destinations"));
    if let Some(target) = target {
        target.scroll_into_view();
    }
}
