//! Two-row scrolling marquee of surgical technology.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::sections::{TECHNOLOGIES, Technology};
use crate::util::viewport::use_in_view;

#[component]
pub fn TechStack() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    let reversed = TECHNOLOGIES.iter().rev().copied().collect::<Vec<_>>();

    view! {
        <section class="tech-stack">
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="CUTTING-EDGE TECHNOLOGY"
                    lead="Advanced Medical"
                    highlight="Equipment"
                    revealed=in_view
                />
            </div>
            <MarqueeRow items=TECHNOLOGIES.to_vec() accent="teal" reverse=false/>
            <MarqueeRow items=reversed accent="amber" reverse=true/>
        </section>
    }
}

/// One marquee row. Items are rendered twice so the CSS loop has no seam.
#[component]
fn MarqueeRow(items: Vec<Technology>, accent: &'static str, reverse: bool) -> impl IntoView {
    let direction = if reverse { "marquee__track--reverse" } else { "" };
    let card = move |tech: &Technology| {
        view! {
            <div class=format!("tech-chip tech-chip--{accent}")>
                <span class="tech-chip__icon">{tech.glyph}</span>
                <div>
                    <h4 class="tech-chip__name">{tech.name}</h4>
                    <p class="tech-chip__description">{tech.description}</p>
                </div>
            </div>
        }
    };
    view! {
        <div class="marquee">
            <div class=format!("marquee__track {direction}")>
                {items.iter().chain(items.iter()).map(card).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
