//! Smooth scrolling to named page sections.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed header; scroll targets land just below it.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Anchor ids of the sections reachable from navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Experience,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 6] =
        [Self::Home, Self::About, Self::Services, Self::Experience, Self::Testimonials, Self::Contact];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Experience => "experience",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }

    /// `#id` form for plain anchor hrefs, so links still work before hydration.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

/// Document-relative y to scroll to so the element sits `offset` below the top.
#[must_use]
pub fn scroll_target_y(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (element_top + scroll_y - offset).max(0.0)
}

/// Smooth-scroll the window to `section`. No-op if the element is missing.
pub fn scroll_to(section: SectionId) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(section.as_str())) else {
            return;
        };
        let top = element.get_bounding_client_rect().top();
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target_y(top, scroll_y, HEADER_OFFSET_PX));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

/// Current vertical scroll position, `0.0` outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
