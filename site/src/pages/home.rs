//! The single landing page: splash loader, then every section in order.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::awards::Awards;
use crate::components::contact::Contact;
use crate::components::custom_cursor::CustomCursor;
use crate::components::experience::Experience;
use crate::components::faq::Faq;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::loader::Loader;
use crate::components::navbar::Navbar;
use crate::components::publications::Publications;
use crate::components::services::Services;
use crate::components::tech_stack::TechStack;
use crate::components::testimonials::Testimonials;
use crate::state::ui::UiState;

/// Landing page. Shows the `Loader` until it reports completion, then the
/// site. The page shell is the only writer of `UiState::loading`.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_loaded = Callback::new(move |()| ui.update(UiState::finish_loading));

    view! {
        <Show
            when=move || !ui.with(|u| u.loading)
            fallback=move || view! { <Loader on_complete=on_loaded/> }
        >
            <CustomCursor/>
            <Navbar/>
            <main class="page">
                <Hero/>
                <About/>
                <Services/>
                <Experience/>
                <TechStack/>
                <Awards/>
                <Testimonials/>
                <Publications/>
                <Gallery/>
                <Faq/>
                <Contact/>
            </main>
            <Footer/>
        </Show>
    }
}
