//! Pointer follower: a ring and a dot that track the mouse.
//!
//! The ring grows over links and buttons. Hidden on touch layouts via CSS.

use leptos::prelude::*;

use crate::util::motion::CursorState;

const RING_SIZE_PX: f64 = 40.0;
const DOT_SIZE_PX: f64 = 8.0;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let cursor = RwSignal::new(CursorState::default());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::motion::INTERACTIVE_SELECTOR;

        let movement = window_event_listener(leptos::ev::mousemove, move |ev| {
            let hovering = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                .is_some();
            cursor.update(|c| {
                c.moved(f64::from(ev.client_x()), f64::from(ev.client_y()));
                c.hovering = hovering;
            });
        });
        let exit = window_event_listener(leptos::ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                cursor.update(CursorState::left);
            }
        });
        on_cleanup(move || {
            movement.remove();
            exit.remove();
        });
    }

    view! {
        <div
            class="cursor cursor--ring"
            class=("cursor--hover", move || cursor.with(|c| c.hovering))
            class=("cursor--hidden", move || cursor.with(|c| !c.visible))
            style:transform=move || cursor.with(|c| c.transform(RING_SIZE_PX))
            aria-hidden="true"
        ></div>
        <div
            class="cursor cursor--dot"
            class=("cursor--hidden", move || cursor.with(|c| !c.visible))
            style:transform=move || cursor.with(|c| c.transform(DOT_SIZE_PX))
            aria-hidden="true"
        ></div>
    }
}
