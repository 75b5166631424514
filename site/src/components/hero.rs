//! Landing banner: typing subtitle, parallax glow, quick stats.

use std::sync::Arc;

use leptos::prelude::*;

use crate::content::DoctorProfile;
use crate::content::sections::HERO_PHRASES;
use crate::state::typing::{TYPE_DELAY_MS, Typewriter};
use crate::util::clock::run_timer_loop;
use crate::util::motion::hero_scroll_transform;
use crate::util::scroll::{SectionId, scroll_to};

/// Decorative particles: (left %, top %, animation delay s).
const PARTICLES: &[(u8, u8, f32)] = &[
    (8, 12, 0.0),
    (22, 68, 0.6),
    (35, 30, 1.2),
    (47, 82, 0.3),
    (58, 18, 1.7),
    (66, 55, 0.9),
    (74, 8, 1.4),
    (83, 72, 0.2),
    (91, 40, 1.1),
    (14, 90, 1.9),
];

#[component]
pub fn Hero() -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();

    let typer = RwSignal::new(Typewriter::new(HERO_PHRASES));
    run_timer_loop(TYPE_DELAY_MS, move || typer.try_update(Typewriter::step));

    let glow = RwSignal::new((0.0_f64, 0.0_f64));
    let scroll_progress = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::parallax_offset;

        let pointer = window_event_listener(leptos::ev::mousemove, move |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            glow.set((
                parallax_offset(f64::from(ev.client_x()), width),
                parallax_offset(f64::from(ev.client_y()), height),
            ));
        });
        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let height = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1.0)
                .max(1.0);
            scroll_progress.set(crate::util::scroll::scroll_y() / height);
        });
        on_cleanup(move || {
            pointer.remove();
            scroll.remove();
        });
    }

    let glow_style = move || {
        let (x, y) = glow.get();
        format!("transform: translate3d({x}px, {y}px, 0)")
    };
    let content_style = move || {
        let (y, opacity) = hero_scroll_transform(scroll_progress.get());
        format!("transform: translateY({y}%); opacity: {opacity}")
    };

    let stats = [
        ("◷", profile.experience.clone(), "Years Experience"),
        ("♥", profile.surgeries.clone(), "Surgeries"),
        ("✪", profile.success_rate.clone(), "Success Rate"),
        ("♛", profile.awards.clone(), "Awards"),
    ];

    view! {
        <section id=SectionId::Home.as_str() class="hero">
            <div class="hero__backdrop">
                <div class="hero__grid"></div>
                {PARTICLES
                    .iter()
                    .map(|&(left, top, delay)| {
                        view! {
                            <span
                                class="hero__particle"
                                style=format!("left: {left}%; top: {top}%; animation-delay: {delay}s")
                            ></span>
                        }
                    })
                    .collect::<Vec<_>>()}
                <div class="hero__orb hero__orb--teal" style=glow_style></div>
                <div class="hero__orb hero__orb--amber"></div>
            </div>

            <div class="container hero__content" style=content_style>
                <div class="hero__copy">
                    <span class="badge badge--pulse">"BOARD CERTIFIED SURGEON"</span>
                    <h1 class="hero__title">
                        <span class="hero__greeting">"Hello, I'm"</span>
                        <span class="gradient-text">{profile.name.clone()}</span>
                    </h1>
                    <p class="hero__typed">
                        <span>{move || typer.with(Typewriter::text)}</span>
                        <span class="hero__caret">"|"</span>
                    </p>
                    <p class="hero__lead">
                        "With over " {profile.experience.clone()}
                        " years of excellence in surgical care, I'm dedicated to providing world-class \
                         medical treatment with precision, compassion, and cutting-edge technology."
                    </p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href=SectionId::Contact.href()
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to(SectionId::Contact);
                            }>
                            "♥ Schedule Consultation"
                        </a>
                        <a class="btn btn--outline" href=SectionId::About.href()
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to(SectionId::About);
                            }>
                            "Learn More"
                        </a>
                    </div>
                    <div class="hero__stats">
                        {stats
                            .into_iter()
                            .map(|(glyph, value, label)| {
                                view! {
                                    <div class="hero__stat">
                                        <span class="hero__stat-icon">{glyph}</span>
                                        <div class="hero__stat-value">{value}</div>
                                        <div class="hero__stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="hero__portrait">
                    <div class="hero__portrait-ring"></div>
                    <div class="hero__portrait-frame">
                        <div class="hero__portrait-inner">
                            <span class="hero__monogram">
                                {profile.name.trim_start_matches("Dr. ").chars().next().map(String::from)}
                            </span>
                            <p class="hero__portrait-name">{profile.name.clone()}</p>
                            <p class="hero__portrait-creds">"MD, FACS"</p>
                        </div>
                    </div>
                    <span class="hero__chip hero__chip--top">"Top Rated"</span>
                    <span class="hero__chip hero__chip--bottom">
                        "✪ " {profile.awards.clone()} " Awards"
                    </span>
                </div>
            </div>

            <a class="hero__scroll-cue" href=SectionId::About.href()
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to(SectionId::About);
                }>
                <span>"Scroll Down"</span>
                <span class="hero__chevron">"⌄"</span>
            </a>
        </section>
    }
}
