//! Weather Widget Component
//!
//! City picker and current conditions.

use leptos::*;

use atithiverse::view;
use atithiverse::weather::WeatherState;

use crate::state::use_global_state;

/// Weather panel for the configured cities
#[component]
pub fn WeatherWidget() -> impl IntoView {
    let state = use_global_state();
    let weather = state.weather;
    let config = state.page.weather_config().clone();
    let (city, set_city) = create_signal(config.default_city.clone());

    let on_change = move |ev: ev::Event| {
        let picked = event_target_value(&ev);
        set_city.set(picked.clone());
        let state = state.clone();
        spawn_local(async move {
            let on_loading = |s: &WeatherState| weather.set(s.clone());
            let next = state.page.weather.load(&picked, &on_loading).await;
            weather.set(next);
        });
    };

    view! {
        <section id="weather" class="weather-section py-5">
            <div class="container">
                <h2 class="section-title text-center">"Weather at Your Destination"</h2>
                <div class="row justify-content-center">
                    <div class="col-md-6">
                        <select id="weatherLocation" class="form-select mb-3" on:change=on_change>
                            {config
                                .locations
                                .into_iter()
                                .map(|location| {
                                    let value = location.clone();
                                    view! {
                                        <option
                                            value=value.clone()
                                            selected=move || city.get() == value
                                        >
                                            {location}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <div
                            class="weather-card"
                            inner_html=move || view::weather::panel(&weather.get()).to_html()
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
