//! Splash screen with the simulated load progress bar.

use leptos::prelude::*;

use crate::content::DoctorProfile;
use crate::state::loader::{LoaderSequence, LoaderState, LoaderStep, TICK_INTERVAL_MS};
use crate::util::clock::run_timer_loop;
use std::sync::Arc;

/// Full-screen loader. Calls `on_complete` once, `COMPLETE_DELAY_MS` after the
/// bar reaches 100%.
#[component]
pub fn Loader(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();
    let loader = RwSignal::new(LoaderState::new());

    let mut sequence = LoaderSequence::new();
    run_timer_loop(TICK_INTERVAL_MS, move || match loader.try_update(|state| sequence.step(state))? {
        LoaderStep::Wait(delay) => Some(delay),
        LoaderStep::Reveal => {
            on_complete.run(());
            None
        }
        LoaderStep::Stop => None,
    });

    let width = move || loader.with(LoaderState::width_style);
    let label = move || format!("{}%", loader.with(LoaderState::progress));

    view! {
        <div class="loader" role="progressbar" aria-valuemin="0" aria-valuemax="100"
            aria-valuenow=move || loader.with(LoaderState::progress).to_string()>
            <div class="loader__inner">
                <div class="loader__logo">
                    <div class="loader__ring"></div>
                    <div class="loader__core">
                        <span class="loader__heart heartbeat">"♥"</span>
                    </div>
                </div>
                <h1 class="loader__name">{profile.name.clone()}</h1>
                <p class="loader__tagline">{profile.title.to_uppercase()}</p>
                <div class="loader__track">
                    <div class="loader__bar" style:width=width></div>
                </div>
                <p class="loader__percent">{label}</p>
            </div>
        </div>
    }
}
