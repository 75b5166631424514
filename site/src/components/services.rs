//! Specializations grid.

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::DoctorProfile;
use crate::util::scroll::{SectionId, scroll_to};
use crate::util::viewport::use_in_view;

#[component]
pub fn Services() -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    let cards = profile
        .services
        .iter()
        .enumerate()
        .map(|(index, service)| {
            let modifier = service.icon.css_modifier();
            view! {
                <article
                    class=format!("service-card service-card--{modifier} reveal")
                    class:is-revealed=move || in_view.get()
                    style=format!("transition-delay: {}ms", index * 100)
                >
                    <div class="service-card__glow"></div>
                    <div class="service-card__icon">{service.icon.glyph()}</div>
                    <h3 class="service-card__title">{service.title.clone()}</h3>
                    <p class="service-card__description">{service.description.clone()}</p>
                    <span class="service-card__more">"Learn More →"</span>
                    <div class="service-card__corner"></div>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::Services.as_str() class="section services">
            <div class="services__pattern"></div>
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="SPECIALIZATIONS"
                    lead="Surgical"
                    highlight="Services"
                    subtitle="Offering comprehensive surgical care with cutting-edge technology and decades of \
                              expertise in various specialized procedures."
                    revealed=in_view
                />
                <div class="services__grid">{cards}</div>
                <div class="services__cta reveal" class:is-revealed=move || in_view.get()>
                    <div>
                        <h4 class="services__cta-title">"Need a Consultation?"</h4>
                        <p class="services__cta-text">"Get expert advice for your specific condition"</p>
                    </div>
                    <button class="btn btn--amber" on:click=move |_| scroll_to(SectionId::Contact)>
                        "Book Appointment"
                    </button>
                </div>
            </div>
        </section>
    }
}
