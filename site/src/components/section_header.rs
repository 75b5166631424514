//! Eyebrow badge, two-tone heading, and accent rule shared by every section.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    #[prop(into)] lead: String,
    #[prop(into)] highlight: String,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(into)] revealed: Signal<bool>,
) -> impl IntoView {
    view! {
        <header class="section-header" class:is-revealed=move || revealed.get()>
            <span class="section-header__eyebrow">{eyebrow}</span>
            <h2 class="section-header__title">
                {lead} " " <span class="gradient-text">{highlight}</span>
            </h2>
            <div class="section-header__rule"></div>
            {subtitle.map(|text| view! { <p class="section-header__subtitle">{text}</p> })}
        </header>
    }
}
