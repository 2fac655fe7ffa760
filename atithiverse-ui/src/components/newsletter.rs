//! Newsletter Component
//!
//! Email signup form.

use leptos::*;

use crate::state::use_global_state;

/// Newsletter signup section
#[component]
pub fn Newsletter() -> impl IntoView {
    let state = use_global_state();
    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        let state = state.clone();
        let address = email.get_untracked();
        spawn_local(async move {
            let outcome = state.page.newsletter.subscribe(&address).await;
            if outcome.clear_input() {
                set_email.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section id="newsletter" class="newsletter-section py-5">
            <div class="container text-center">
                <h2 class="section-title">"Stay Inspired"</h2>
                <p class="text-muted">"Travel stories, festival calendars and offers, once a month."</p>
                <form class="newsletter-form d-flex justify-content-center" on:submit=on_submit>
                    <input
                        type="email"
                        class="form-control w-50 me-2"
                        placeholder="Your email address"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Subscribing..." } else { "Subscribe" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
