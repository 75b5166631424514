use super::*;

#[test]
fn ids_round_trip_through_parse() {
    for id in SectionId::ALL {
        assert_eq!(SectionId::parse(id.as_str()), Some(id));
    }
    assert_eq!(SectionId::parse("gallery"), None);
}

#[test]
fn href_is_fragment() {
    assert_eq!(SectionId::Contact.href(), "#contact");
}

#[test]
fn target_accounts_for_scroll_and_header() {
    assert!((scroll_target_y(500.0, 1_000.0, HEADER_OFFSET_PX) - 1_420.0).abs() < f64::EPSILON);
}

#[test]
fn target_never_negative() {
    assert!(scroll_target_y(10.0, 0.0, HEADER_OFFSET_PX).abs() < f64::EPSILON);
}
