//! Delegated Clicks
//!
//! Markup rendered from the client layer's views marks its interactive
//! elements with `data-action`. Containers listen once and dispatch here.

use leptos::*;
use wasm_bindgen::JsCast;

use atithiverse::view::{self, Node};
use atithiverse::wishlist::{ToggleOutcome, WishlistButton};

use crate::state::global::GlobalState;

/// A click on a `data-action` element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reload,
    ViewDetails(u64),
    Wishlist { destination_id: u64, saved: bool },
    BookNow(u64),
    PickSuggestion(String),
    QuickAction(String),
    DismissToast,
}

impl Action {
    /// Decode an action from the clicked element's attributes
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let id = || get("data-destination-id").and_then(|v| v.parse::<u64>().ok());

        let action = match get("data-action")?.as_str() {
            "reload" => Action::Reload,
            // A missing id goes through as 0 so the detail handler can refuse it
            "view-details" => Action::ViewDetails(id().unwrap_or(0)),
            "wishlist" => Action::Wishlist {
                destination_id: id()?,
                saved: get("data-in-wishlist").as_deref() == Some("true"),
            },
            "book-now" => Action::BookNow(id()?),
            "pick-suggestion" => Action::PickSuggestion(get("data-value")?),
            "quick-action" => Action::QuickAction(get("data-message")?),
            "dismiss-toast" => Action::DismissToast,
            _ => return None,
        };
        Some(action)
    }
}

/// The action under a click, if any
pub fn action_from_event(ev: &ev::MouseEvent) -> Option<Action> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let element = target.closest("[data-action]").ok()??;
    ev.prevent_default();
    Action::from_attributes(|name| element.get_attribute(name))
}

/// Replace every rendered card button for this destination
fn patch_wishlist_buttons(button: &WishlistButton) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let selector = format!(
        ".wishlist-btn[data-destination-id=\"{}\"]",
        button.destination_id
    );
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return;
    };

    let html = Node::from(view::cards::wishlist_button(button)).to_html();
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            element.set_outer_html(&html);
        }
    }
}

/// Toggle a destination's wishlist entry and keep every view of it in step
pub fn toggle_wishlist(state: GlobalState, destination_id: u64, saved: bool, on_done: impl Fn(bool) + 'static) {
    let button = state.wishlist_button(destination_id, saved);
    spawn_local(async move {
        let outcome = state
            .page
            .wishlist
            .toggle(&button, &patch_wishlist_buttons)
            .await;
        if let ToggleOutcome::Updated { in_wishlist } = outcome {
            state.page.grid.set_saved(destination_id, in_wishlist);
            on_done(in_wishlist);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn decode(attrs: &[(&str, &str)]) -> Option<Action> {
        let map: HashMap<String, String> = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Action::from_attributes(|name| map.get(name).cloned())
    }

    #[test]
    fn test_decode_wishlist() {
        assert_eq!(
            decode(&[
                ("data-action", "wishlist"),
                ("data-destination-id", "12"),
                ("data-in-wishlist", "true")
            ]),
            Some(Action::Wishlist {
                destination_id: 12,
                saved: true
            })
        );
        assert_eq!(decode(&[("data-action", "wishlist")]), None);
    }

    #[test]
    fn test_view_details_without_id_is_zero() {
        assert_eq!(
            decode(&[("data-action", "view-details")]),
            Some(Action::ViewDetails(0))
        );
    }

    #[test]
    fn test_unknown_action_is_ignored() {
        assert_eq!(decode(&[("data-action", "fly")]), None);
        assert_eq!(decode(&[]), None);
        assert_eq!(
            decode(&[("data-action", "quick-action"), ("data-message", "Best time to visit Goa")]),
            Some(Action::QuickAction("Best time to visit Goa".to_string()))
        );
    }
}
