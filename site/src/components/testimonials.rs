//! Patient testimonials carousel with autoplay and pagination.

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::sections::TRUST_INDICATORS;
use crate::content::{DoctorProfile, Testimonial};
use crate::state::carousel::{AUTOPLAY_DELAY_MS, Carousel};
use crate::util::clock::run_timer_loop;
use crate::util::scroll::SectionId;
use crate::util::viewport::use_in_view;

const MAX_STARS: u8 = 5;

#[component]
pub fn Testimonials() -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    let carousel = RwSignal::new(Carousel::new(profile.testimonials.len()));
    let per_view = RwSignal::new(1_usize);

    run_timer_loop(AUTOPLAY_DELAY_MS, move || {
        carousel.try_update(Carousel::next)?;
        Some(AUTOPLAY_DELAY_MS)
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::carousel::slides_per_view;

        let measure = move || {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let count = slides_per_view(width);
            if per_view.get_untracked() != count {
                per_view.set(count);
            }
        };
        measure();
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    let slides_profile = profile.clone();
    let slides = move || {
        let active = carousel.with(Carousel::index);
        carousel
            .with(|c| c.visible(per_view.get()))
            .into_iter()
            .filter_map(|i| slides_profile.testimonials.get(i).map(|t| (i, t.clone())))
            .map(|(i, testimonial)| view! { <TestimonialCard testimonial active={i == active}/> })
            .collect::<Vec<_>>()
    };

    let bullets = move || {
        let active = carousel.with(Carousel::index);
        (0..carousel.with(Carousel::len))
            .map(|i| {
                view! {
                    <button
                        class="carousel__bullet"
                        class:is-active={i == active}
                        aria-label=format!("Show testimonial {}", i + 1)
                        on:click=move |_| carousel.update(|c| c.go_to(i))
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section id=SectionId::Testimonials.as_str() class="section testimonials">
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="PATIENT STORIES"
                    lead="What Patients"
                    highlight="Say"
                    subtitle="Hear from patients whose lives have been transformed through exceptional surgical care"
                    revealed=in_view
                />
                <div class="carousel reveal" class:is-revealed=move || in_view.get()>
                    <div class="carousel__track" style=move || format!("--per-view: {}", per_view.get())>
                        {slides}
                    </div>
                    <div class="carousel__pagination">{bullets}</div>
                </div>
                <div class="trust">
                    {TRUST_INDICATORS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="trust__item">
                                    <div class="trust__value">{*value}</div>
                                    <div class="trust__label">{*label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, active: bool) -> impl IntoView {
    let stars = (0..MAX_STARS)
        .map(|i| {
            let class = if i < testimonial.rating { "star star--filled" } else { "star" };
            view! { <span class=class>"★"</span> }
        })
        .collect::<Vec<_>>();
    let initial = testimonial.initial();

    view! {
        <article class="testimonial-card" class:is-active=active>
            <div class="testimonial-card__quote">"❝"</div>
            <div class="testimonial-card__stars">{stars}</div>
            <p class="testimonial-card__text">{format!("\u{201c}{}\u{201d}", testimonial.content)}</p>
            <div class="testimonial-card__author">
                <span class="testimonial-card__avatar">{initial}</span>
                <div>
                    <h4 class="testimonial-card__name">{testimonial.name}</h4>
                    <p class="testimonial-card__role">{testimonial.role}</p>
                </div>
            </div>
        </article>
    }
}
