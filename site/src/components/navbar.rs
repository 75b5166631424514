//! Fixed top navigation with the mobile menu.

use std::sync::Arc;

use leptos::prelude::*;

use crate::content::DoctorProfile;
use crate::content::sections::NAV_ITEMS;
use crate::state::ui::UiState;
use crate::util::scroll::{SectionId, scroll_to};

/// Navigation bar. The only writer of `UiState::menu_open` and `scrolled`.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let profile = expect_context::<Arc<DoctorProfile>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = crate::util::scroll::scroll_y();
            ui.maybe_update(|u| u.observe_scroll(y));
        });
        on_cleanup(move || handle.remove());
    }

    let on_toggle = move |_| ui.update(UiState::toggle_menu);
    let go = move |ev: leptos::ev::MouseEvent, target: SectionId| {
        ev.prevent_default();
        ui.update(UiState::close_menu);
        scroll_to(target);
    };

    let desktop_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let target = item.target;
            view! {
                <a class="navbar__link" href=target.href() on:click=move |ev| go(ev, target)>
                    {item.label}
                    <span class="navbar__underline"></span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    let phone_href = profile.phone_href();
    let mobile_phone_href = phone_href.clone();

    view! {
        <nav class="navbar" class=("navbar--scrolled", move || ui.with(|u| u.scrolled))>
            <div class="container navbar__bar">
                <a class="navbar__brand" href=SectionId::Home.href()
                    on:click=move |ev| go(ev, SectionId::Home)>
                    <span class="navbar__logo">
                        <span class="heartbeat">"♥"</span>
                        <span class="navbar__logo-dot"></span>
                    </span>
                    <span>
                        <span class="navbar__name">{profile.name.clone()}</span>
                        <span class="navbar__role">"SURGEON"</span>
                    </span>
                </a>

                <div class="navbar__links">{desktop_links}</div>

                <a class="btn btn--primary navbar__cta" href=phone_href>
                    "☏ Book Consultation"
                </a>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || ui.with(|u| u.menu_open).to_string()
                    on:click=on_toggle
                >
                    {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || ui.with(|u| u.menu_open)>
                <div class="navbar__mobile">
                    <div class="container">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let target = item.target;
                                view! {
                                    <a class="navbar__mobile-link" href=target.href()
                                        on:click=move |ev| go(ev, target)>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <a class="btn btn--primary navbar__mobile-cta" href=mobile_phone_href.clone()>
                            "☏ Book Consultation"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
