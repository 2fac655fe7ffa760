//! Home Page
//!
//! Hero search, destination grid, weather and newsletter.

use leptos::*;

use crate::components::{DestinationGrid, Newsletter, SearchBar, Stats, WeatherWidget};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="hero-section d-flex align-items-center">
            <div class="container text-center text-white">
                <h1 class="hero-title">"Discover Incredible India"</h1>
                <p class="hero-subtitle">"Heritage, beaches, mountains and festivals, planned with AtithiBot"</p>
                <SearchBar />
                <Stats />
            </div>
        </section>
        <DestinationGrid />
        <WeatherWidget />
        <Newsletter />
    }
}
