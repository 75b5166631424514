use super::*;
use crate::content::sections::{FAQS, HERO_PHRASES, MEDIA, MediaKind, NAV_ITEMS};

// =============================================================
// DoctorProfile
// =============================================================

#[test]
fn dr_gari_profile_has_six_services() {
    let profile = DoctorProfile::dr_gari();
    assert_eq!(profile.services.len(), 6);
    assert_eq!(profile.services[0].title, "Minimally Invasive Surgery");
    assert_eq!(profile.services[0].icon, ServiceIcon::Surgery);
}

#[test]
fn default_profile_is_dr_gari() {
    assert_eq!(DoctorProfile::default(), DoctorProfile::dr_gari());
}

#[test]
fn offers_service_matches_exact_titles_only() {
    let profile = DoctorProfile::dr_gari();
    assert!(profile.offers_service("Robotic Surgery"));
    assert!(!profile.offers_service("robotic surgery"));
    assert!(!profile.offers_service("Dentistry"));
}

#[test]
fn phone_href_strips_formatting() {
    let profile = DoctorProfile::dr_gari();
    assert_eq!(profile.phone_href(), "tel:+15551234567");
}

#[test]
fn email_href_prefixes_mailto() {
    let profile = DoctorProfile::dr_gari();
    assert_eq!(profile.email_href(), "mailto:contact@drgari.com");
}

#[test]
fn testimonials_are_five_star() {
    let profile = DoctorProfile::dr_gari();
    assert_eq!(profile.testimonials.len(), 4);
    assert!(profile.testimonials.iter().all(|t| t.rating == 5));
}

#[test]
fn testimonial_initial_is_first_letter() {
    let profile = DoctorProfile::dr_gari();
    assert_eq!(profile.testimonials[1].initial(), "S");
}

#[test]
fn bio_line_continuations_collapse_whitespace() {
    let profile = DoctorProfile::dr_gari();
    assert!(!profile.bio.contains("  "));
    assert!(profile.bio.starts_with("With over 25 years"));
}

#[test]
fn service_icon_serializes_snake_case() {
    let json = serde_json::to_string(&ServiceIcon::Reconstruct).unwrap();
    assert_eq!(json, "\"reconstruct\"");
}

// =============================================================
// Section tables
// =============================================================

#[test]
fn nav_items_cover_the_scroll_targets() {
    let ids = NAV_ITEMS.iter().map(|n| n.target.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["home", "about", "services", "experience", "testimonials", "contact"]);
}

#[test]
fn faq_table_has_six_entries() {
    assert_eq!(FAQS.len(), 6);
}

#[test]
fn hero_phrases_are_non_empty() {
    assert!(!HERO_PHRASES.is_empty());
    assert!(HERO_PHRASES.iter().all(|p| !p.is_empty()));
}

#[test]
fn media_has_exactly_one_video() {
    assert_eq!(MEDIA.iter().filter(|m| m.kind == MediaKind::Video).count(), 1);
}
