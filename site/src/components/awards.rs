//! Awards and recognition grid.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::sections::AWARDS;
use crate::util::viewport::use_in_view;

#[component]
pub fn Awards() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    view! {
        <section id="awards" class="section awards">
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="RECOGNITION"
                    lead="Awards &"
                    highlight="Honors"
                    subtitle="Recognition for excellence in surgical care and innovation"
                    revealed=in_view
                />
                <div class="awards__grid">
                    {AWARDS
                        .iter()
                        .enumerate()
                        .map(|(index, award)| {
                            view! {
                                <article
                                    class=format!("award-card award-card--{} reveal", award.accent)
                                    class:is-revealed=move || in_view.get()
                                    style=format!("transition-delay: {}ms", index * 100)
                                >
                                    <div class="award-card__icon">{award.glyph}</div>
                                    <span class="award-card__year">{award.year}</span>
                                    <h3 class="award-card__title">{award.title}</h3>
                                    <p class="award-card__org">{award.organization}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
