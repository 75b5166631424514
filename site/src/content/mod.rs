//! Read-only site content.
//!
//! DESIGN
//! ======
//! `DoctorProfile` is the single record every section renders from. It is
//! built once by the application shell and shared through Leptos context as
//! an `Arc`, so nothing downstream can mutate it. Copy that only one section
//! uses (timeline entries, FAQ, awards, ...) lives in `sections` as `'static`
//! tables.

pub mod profile;
pub mod sections;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

/// Identity, narrative, highlights, and contact details for the surgeon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub name: String,
    pub title: String,
    pub specialization: String,
    pub bio: String,
    /// Pre-formatted display strings, e.g. `"25+"`, `"99.2%"`.
    pub experience: String,
    pub surgeries: String,
    pub success_rate: String,
    pub awards: String,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub services: Vec<Service>,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub publications: Vec<PublicationRef>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social: SocialLinks,
}

impl DoctorProfile {
    /// Titles of every offered service, in display order.
    pub fn service_titles(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|s| s.title.as_str())
    }

    /// Whether `title` names one of the offered services (exact match).
    #[must_use]
    pub fn offers_service(&self, title: &str) -> bool {
        self.service_titles().any(|t| t == title)
    }

    /// `tel:` link with the display formatting stripped.
    #[must_use]
    pub fn phone_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }

    #[must_use]
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// A service card in the specializations grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
}

/// Icon family for a service card. Also selects the card's accent gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIcon {
    Surgery,
    #[default]
    Heart,
    Robot,
    Emergency,
    Cancer,
    Reconstruct,
}

impl ServiceIcon {
    /// CSS modifier suffix used for the icon glyph and gradient.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Surgery => "surgery",
            Self::Heart => "heart",
            Self::Robot => "robot",
            Self::Emergency => "emergency",
            Self::Cancer => "cancer",
            Self::Reconstruct => "reconstruct",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Surgery => "✂",
            Self::Heart => "♥",
            Self::Robot => "⚙",
            Self::Emergency => "✚",
            Self::Cancer => "⛨",
            Self::Reconstruct => "↻",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    /// Star rating out of five.
    pub rating: u8,
}

impl Testimonial {
    /// First character of the author's name, used as an avatar stand-in.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Short publication reference shown in the about section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRef {
    pub title: String,
    pub journal: String,
    pub year: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub researchgate: String,
}
