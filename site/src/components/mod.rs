//! Page sections and chrome.
//!
//! Every section reads the shared `Arc<DoctorProfile>` from context (or a
//! `'static` table in `content::sections`) and owns only cosmetic local
//! state: in-view flags, timers, hover.

pub mod about;
pub mod awards;
pub mod contact;
pub mod custom_cursor;
pub mod experience;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod loader;
pub mod navbar;
pub mod publications;
pub mod section_header;
pub mod services;
pub mod tech_stack;
pub mod testimonials;
