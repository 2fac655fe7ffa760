//! Stats Component
//!
//! Hero counters that count up once on load.

use leptos::*;

use atithiverse::effects::{CounterAnimation, COUNTER_FRAME_INTERVAL};

const STATS: &[(&str, &str)] = &[
    ("500+", "Destinations"),
    ("50K+", "Happy Travelers"),
    ("4.9⭐", "Average Rating"),
];

/// Row of animated counters
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <div class="hero-stats d-flex justify-content-center gap-5 mt-4">
            {STATS
                .iter()
                .map(|&(value, label)| view! { <Counter value=value label=label /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn Counter(value: &'static str, label: &'static str) -> impl IntoView {
    let (shown, set_shown) = create_signal(value.to_string());

    if let Some(animation) = CounterAnimation::parse(value) {
        spawn_local(async move {
            for frame in animation.frames() {
                set_shown.set(frame);
                gloo_timers::future::sleep(COUNTER_FRAME_INTERVAL).await;
            }
        });
    }

    view! {
        <div class="stat-item text-center">
            <h3 class="stat-number">{move || shown.get()}</h3>
            <p class="stat-label">{label}</p>
        </div>
    }
}
