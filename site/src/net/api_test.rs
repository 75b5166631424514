use super::*;
use crate::state::contact::{Field, FieldErrors};

#[test]
fn server_message_wins() {
    let body = ContactResponse::failed("Mail provider unavailable");
    let failure = contact_failure(502, Some(body));
    assert_eq!(failure.message, "Mail provider unavailable");
    assert!(failure.errors.is_empty());
}

#[test]
fn rate_limit_without_body() {
    assert_eq!(contact_failure(429, None), SubmitFailure::new(RATE_LIMITED));
}

#[test]
fn validation_rejection_carries_field_errors() {
    let mut errors = FieldErrors::new();
    errors.insert(Field::Email, "Invalid email address".to_owned());
    let body = ContactResponse::invalid(errors.clone());
    let failure = contact_failure(422, Some(body));
    assert_eq!(failure.message, FIELDS_REJECTED);
    assert_eq!(failure.errors, errors);
}

#[test]
fn validation_rejection_parsed_from_wire_highlights_form() {
    use crate::content::DoctorProfile;
    use crate::state::contact::{ContactForm, ContactPolicy, SubmitStatus};

    let body: ContactResponse =
        serde_json::from_str(r#"{"ok":false,"errors":{"phone":"Phone is required"}}"#).unwrap();
    let mut form = ContactForm::new();
    form.fields.name = "Jo".to_owned();
    form.fields.email = "jo@example.com".to_owned();
    form.fields.phone = "555".to_owned();
    form.fields.message = "hi".to_owned();
    let pending = form.begin_submit(ContactPolicy::default(), &DoctorProfile::dr_gari()).unwrap();

    assert!(form.complete(pending.seq, Err(contact_failure(422, Some(body)))));
    assert_eq!(form.error(Field::Phone), Some("Phone is required"));
    assert_eq!(form.status, SubmitStatus::Failed(FIELDS_REJECTED.to_owned()));
}

#[test]
fn other_statuses_are_generic() {
    assert_eq!(contact_failure(500, None).message, GENERIC_FAILURE);
}

#[test]
fn accepted_response_serializes_compactly() {
    let json = serde_json::to_value(ContactResponse::accepted()).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true }));
}

#[test]
fn invalid_response_carries_field_errors() {
    let mut errors = FieldErrors::new();
    errors.insert(Field::Name, "Name is required".to_owned());
    let json = serde_json::to_value(ContactResponse::invalid(errors)).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": false, "errors": { "name": "Name is required" } }));
}

#[test]
fn response_parses_without_optional_keys() {
    let parsed: ContactResponse = serde_json::from_str(r#"{"ok":false,"message":"nope"}"#).unwrap();
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.message.as_deref(), Some("nope"));
}
