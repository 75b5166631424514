//! Count-up achievement counters and the career timeline.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::sections::{ACHIEVEMENTS, Achievement, CAREER, TimelineEntry};
use crate::state::counter::{COUNT_FRAME_MS, CountUp};
use crate::util::clock::{now_ms, run_timer_loop};
use crate::util::scroll::SectionId;
use crate::util::viewport::use_in_view;

#[component]
pub fn Experience() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    view! {
        <section id=SectionId::Experience.as_str() class="section experience">
            <div class="experience__edge experience__edge--top"></div>
            <div class="experience__edge experience__edge--bottom"></div>
            <div class="container" node_ref=container>
                <SectionHeader
                    eyebrow="CAREER JOURNEY"
                    lead="Professional"
                    highlight="Experience"
                    subtitle="A distinguished career spanning over two decades at world-renowned medical institutions"
                    revealed=in_view
                />
                <div class="experience__stats">
                    {ACHIEVEMENTS.iter().map(|item| view! { <StatCounter item=*item/> }).collect::<Vec<_>>()}
                </div>
                <div class="timeline">
                    <div class="timeline__line"></div>
                    {CAREER
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <TimelineCard entry=*entry index revealed=in_view/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One counter; starts counting the first time it scrolls into view.
#[component]
fn StatCounter(item: Achievement) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let in_view = use_in_view(node, true);
    let counter = RwSignal::new(CountUp::new(item.value));

    Effect::new(move || {
        if !in_view.get() {
            return;
        }
        let started = now_ms();
        counter.update(|c| c.start(started));
        run_timer_loop(COUNT_FRAME_MS, move || {
            let done = counter.try_update(|c| c.advance(now_ms()))?;
            (!done).then_some(COUNT_FRAME_MS)
        });
    });

    view! {
        <div class=format!("stat-counter stat-counter--{}", item.accent) node_ref=node>
            <div class="stat-counter__value">{move || counter.with(CountUp::display)}</div>
            <div class="stat-counter__label">{item.label}</div>
        </div>
    }
}

#[component]
fn TimelineCard(entry: TimelineEntry, index: usize, revealed: ReadSignal<bool>) -> impl IntoView {
    let side = if index % 2 == 0 { "timeline__item--left" } else { "timeline__item--right" };
    view! {
        <div
            class=format!("timeline__item {side} reveal")
            class:is-revealed=move || revealed.get()
            style=format!("transition-delay: {}ms", 300 + index * 200)
        >
            <span class="timeline__dot"></span>
            <article class="timeline__card">
                <span class="timeline__period">"📅 " {entry.period}</span>
                <h3 class="timeline__title">{entry.title}</h3>
                <div class="timeline__meta">
                    <span class="timeline__org">{entry.organization}</span>
                    <span class="timeline__location">"📍 " {entry.location}</span>
                </div>
                <p class="timeline__description">{entry.description}</p>
                <ul class="timeline__achievements">
                    {entry
                        .achievements
                        .iter()
                        .map(|a| view! { <li class="timeline__achievement">{*a}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </article>
        </div>
    }
}
