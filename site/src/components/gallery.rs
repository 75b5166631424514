//! Media gallery grid.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::sections::{MEDIA, MediaKind};
use crate::util::viewport::use_in_view;

#[component]
pub fn Gallery() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let in_view = use_in_view(container, true);

    let tiles = MEDIA
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let featured = index == 0;
            let is_video = item.kind == MediaKind::Video;
            view! {
                <figure
                    class="gallery__tile reveal"
                    class=("gallery__tile--featured", featured)
                    class:is-revealed=move || in_view.get()
                    style=format!("transition-delay: {}ms", index * 100)
                >
                    <div class="gallery__placeholder">
                        <span class="gallery__icon">{if is_video { "▶" } else { "▤" }}</span>
                        <p class="gallery__caption">{item.title}</p>
                    </div>
                    <figcaption class="gallery__overlay">
                        <span class="gallery__category">{item.category}</span>
                        <h4 class="gallery__title">{item.title}</h4>
                        {is_video.then(|| view! { <span class="gallery__play">"▶"</span> })}
                    </figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="gallery" class="section gallery">
            <div class="container" node_ref=container>
                <SectionHeader eyebrow="MEDIA" lead="Gallery &" highlight="Media" revealed=in_view/>
                <div class="gallery__grid">{tiles}</div>
            </div>
        </section>
    }
}
