//! AtithiVerse Frontend
//!
//! Leptos (WASM) host for the AtithiVerse client layer.
//!
//! # Features
//!
//! - Destination grid with category filters, search and autocomplete
//! - Destination detail page with wishlist and booking
//! - AtithiBot chat widget with offline fallback
//! - Weather and newsletter widgets
//!
//! # Architecture
//!
//! All behavior lives in the `atithiverse` crate. This crate only supplies
//! the browser transport, timers and storage, and turns controller updates
//! into reactive signals.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
