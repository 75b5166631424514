//! Research publications list.

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::DoctorProfile;
use crate::content::sections::PUBLICATIONS;
use crate::util::viewport::use_in_view;

#[component]
pub fn Publications() -> impl IntoView {
    let profile = expect_context::<Arc<DoctorProfile>>();
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    let entries = PUBLICATIONS
        .iter()
        .enumerate()
        .map(|(index, publication)| {
            let tags = publication
                .tags
                .iter()
                .map(|tag| view! { <span class="publication__tag">"# " {*tag}</span> })
                .collect::<Vec<_>>();
            view! {
                <article
                    class="publication reveal"
                    class:is-revealed=move || in_view.get()
                    style=format!("transition-delay: {}ms", index * 100)
                >
                    <div class="publication__citations">
                        <span class="publication__citation-count">{publication.citations}</span>
                        <span class="publication__citation-label">"Citations"</span>
                    </div>
                    <div class="publication__body">
                        <h3 class="publication__title">{publication.title}</h3>
                        <div class="publication__meta">
                            <span class="publication__journal">{publication.journal}</span>
                            <span class="publication__date">"📅 " {publication.date}</span>
                        </div>
                        <p class="publication__summary">{publication.summary}</p>
                        <div class="publication__tags">{tags}</div>
                    </div>
                    <span class="publication__arrow">"↗"</span>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="publications" class="section publications">
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="RESEARCH"
                    lead="Publications &"
                    highlight="Research"
                    subtitle="Contributing to medical science through peer-reviewed research and clinical studies"
                    revealed=in_view
                />
                <div class="publications__list">{entries}</div>
                <div class="publications__more">
                    <a class="btn btn--outline" href=profile.social.researchgate.clone() target="_blank" rel="noopener">
                        "View All Publications →"
                    </a>
                </div>
            </div>
        </section>
    }
}
