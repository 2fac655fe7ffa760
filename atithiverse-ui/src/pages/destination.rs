//! Destination Page
//!
//! Detail view for `/destination/:id`.

use leptos::*;
use leptos_router::*;

use atithiverse::destinations::{book_now, load_destination_detail, BookingOutcome};
use atithiverse::models::Destination;
use atithiverse::notify::Notifier;
use atithiverse::view;

use crate::components::actions::{action_from_event, toggle_wishlist, Action};
use crate::components::Loading;
use crate::state::use_global_state;

/// Where the detail fetch stands
#[derive(Clone, Debug, PartialEq)]
enum Detail {
    Loading,
    Missing,
    Ready(Destination),
}

/// Destination detail page component
#[component]
pub fn DestinationPage() -> impl IntoView {
    let state = use_global_state();
    let params = use_params_map();
    let detail = create_rw_signal(Detail::Loading);

    let fetch_state = state.clone();
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").and_then(|v| v.parse::<u64>().ok()));
        detail.set(Detail::Loading);

        let state = fetch_state.clone();
        spawn_local(async move {
            let Some(id) = id else {
                state.page.notifications().error("Invalid destination ID");
                detail.set(Detail::Missing);
                return;
            };
            let loaded =
                load_destination_detail(&**state.page.backend(), id, &**state.page.notifications())
                    .await;
            detail.set(loaded.map_or(Detail::Missing, Detail::Ready));
        });
    });

    let on_click = move |ev: ev::MouseEvent| {
        match action_from_event(&ev) {
            Some(Action::Wishlist { destination_id, .. }) => {
                let saved = detail.with_untracked(|d| match d {
                    Detail::Ready(dest) => dest.in_wishlist,
                    _ => false,
                });
                toggle_wishlist(state.clone(), destination_id, saved, move |in_wishlist| {
                    detail.update(|d| {
                        if let Detail::Ready(dest) = d {
                            dest.in_wishlist = in_wishlist;
                        }
                    });
                });
            }
            Some(Action::BookNow(_)) => {
                let path = web_sys::window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string());
                let outcome = book_now(state.page.session(), &**state.page.notifications(), &path);
                if let BookingOutcome::LoginRedirect { path, after } = outcome {
                    spawn_local(async move {
                        gloo_timers::future::sleep(after).await;
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&path);
                        }
                    });
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="container py-5 mt-5">
            <A href="/" class="btn btn-link mb-3">
                <i class="fas fa-arrow-left me-1" />
                "Back to destinations"
            </A>
            {move || match detail.get() {
                Detail::Loading => view! { <Loading /> }.into_view(),
                Detail::Missing => view! {
                    <div class="text-center py-5">
                        <i class="fas fa-map-marked-alt fa-3x text-muted mb-3" />
                        <h4>"Destination not available"</h4>
                    </div>
                }.into_view(),
                Detail::Ready(dest) => view! {
                    <div
                        on:click=on_click.clone()
                        inner_html=view::cards::destination_detail(&dest).to_html()
                    />
                }.into_view(),
            }}
        </div>
    }
}
