//! FAQ accordion.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::sections::FAQS;
use crate::state::faq::FaqAccordion;
use crate::util::scroll::{SectionId, scroll_to};
use crate::util::viewport::use_in_view;

/// Accordion over `FAQS`. `default_open` is the entry expanded on first render.
#[component]
pub fn Faq(#[prop(default = Some(0))] default_open: Option<usize>) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);
    let accordion = RwSignal::new(FaqAccordion::new(default_open));

    let items = FAQS
        .iter()
        .enumerate()
        .map(|(index, faq)| {
            let open = move || accordion.with(|a| a.is_open(index));
            view! {
                <div
                    class="faq__item reveal"
                    class=("faq__item--open", open)
                    class:is-revealed=move || in_view.get()
                    style=format!("transition-delay: {}ms", index * 100)
                >
                    <button
                        class="faq__question"
                        aria-expanded=move || open().to_string()
                        on:click=move |_| accordion.update(|a| a.toggle(index))
                    >
                        <span>{faq.question}</span>
                        <span class="faq__chevron">"⌄"</span>
                    </button>
                    <div class="faq__answer" aria-hidden=move || (!open()).to_string()>
                        <p>{faq.answer}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="faq" class="section faq">
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="FAQ"
                    lead="Frequently Asked"
                    highlight="Questions"
                    subtitle="Find answers to common questions about procedures, consultations, and care"
                    revealed=in_view
                />
                <div class="faq__list">{items}</div>
                <div class="faq__cta">
                    <p>"Still have questions?"</p>
                    <a class="btn btn--primary" href=SectionId::Contact.href()
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to(SectionId::Contact);
                        }>
                        "Contact Us"
                    </a>
                </div>
            </div>
        </section>
    }
}
