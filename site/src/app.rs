//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::DoctorProfile;
use crate::pages::home::HomePage;
use crate::state::contact::{ContactPolicy, POLICY_META_NAME};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The contact policy from the router context is written into the head so the
/// hydrated form validates with the server's rules.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let policy = use_context::<ContactPolicy>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=POLICY_META_NAME content=policy.meta_content()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the content record once and provides it, the page chrome state,
/// and the contact policy to every section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile = Arc::new(DoctorProfile::dr_gari());
    let title = format!("{} | {}", profile.name, profile.title);
    let description = format!("{}, {}.", profile.name, profile.specialization);

    provide_context(profile);
    provide_context(RwSignal::new(UiState::default()));
    provide_context(page_contact_policy());

    view! {
        <Stylesheet id="leptos" href="/pkg/drgari.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Contact policy for this render: router context on the server, the shell's
/// `<meta>` tag in the browser.
fn page_contact_policy() -> ContactPolicy {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{POLICY_META_NAME}\"]");
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        ContactPolicy::from_meta_content(content.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<ContactPolicy>().unwrap_or_default()
    }
}
