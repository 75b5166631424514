use serde_json::json;

use super::*;
use crate::mail::config::DEFAULT_EMAILJS_API_URL;

fn config() -> EmailJsConfig {
    EmailJsConfig {
        service_id: "service_abc".into(),
        template_id: "template_xyz".into(),
        public_key: "pk_123".into(),
        access_token: None,
        api_url: DEFAULT_EMAILJS_API_URL.into(),
        inbox: None,
    }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        phone: Some("555".into()),
        service: Some("Robotic Surgery".into()),
        message: "hi".into(),
    }
}

#[test]
fn body_carries_ids_and_form_fields() {
    let cfg = config();
    let req = submission();
    let body = serde_json::to_value(send_request(&cfg, &req)).unwrap();
    assert_eq!(
        body,
        json!({
            "service_id": "service_abc",
            "template_id": "template_xyz",
            "user_id": "pk_123",
            "template_params": {
                "name": "Jo",
                "email": "jo@example.com",
                "phone": "555",
                "service": "Robotic Surgery",
                "message": "hi",
                "subject": "Appointment request: Robotic Surgery (Jo)",
            }
        })
    );
}

#[test]
fn optional_settings_are_included_when_present() {
    let mut cfg = config();
    cfg.access_token = Some("private".into());
    cfg.inbox = Some("office@example.com".into());
    let req = submission();
    let body = serde_json::to_value(send_request(&cfg, &req)).unwrap();
    assert_eq!(body["accessToken"], "private");
    assert_eq!(body["template_params"]["to_email"], "office@example.com");
}

#[test]
fn missing_optional_fields_become_empty_strings() {
    let cfg = config();
    let mut req = submission();
    req.phone = None;
    req.service = None;
    let body = serde_json::to_value(send_request(&cfg, &req)).unwrap();
    assert_eq!(body["template_params"]["phone"], "");
    assert_eq!(body["template_params"]["service"], "");
    assert_eq!(body["template_params"]["subject"], "Appointment request from Jo");
}
