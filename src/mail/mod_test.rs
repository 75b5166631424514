use super::*;
use crate::mail::config::{DEFAULT_EMAILJS_API_URL, EmailJsConfig, ResendConfig};

fn submission(service: Option<&str>) -> ContactSubmission {
    ContactSubmission {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        phone: None,
        service: service.map(str::to_owned),
        message: "hi".into(),
    }
}

#[test]
fn subject_names_service_when_chosen() {
    assert_eq!(subject_for(&submission(Some("Trauma Surgery"))), "Appointment request: Trauma Surgery (Jo)");
    assert_eq!(subject_for(&submission(None)), "Appointment request from Jo");
}

#[test]
fn build_mailer_selects_provider() {
    let log = build_mailer(MailConfig::log_only()).unwrap();
    assert_eq!(log.provider(), "log");

    let emailjs = build_mailer(MailConfig {
        provider: ProviderConfig::EmailJs(EmailJsConfig {
            service_id: "s".into(),
            template_id: "t".into(),
            public_key: "k".into(),
            access_token: None,
            api_url: DEFAULT_EMAILJS_API_URL.into(),
            inbox: None,
        }),
        request_timeout_secs: 5,
    })
    .unwrap();
    assert_eq!(emailjs.provider(), "emailjs");

    let resend = build_mailer(MailConfig {
        provider: ProviderConfig::Resend(ResendConfig {
            api_key: "re_test".into(),
            from: "site@example.com".into(),
            to: "office@example.com".into(),
        }),
        request_timeout_secs: 5,
    })
    .unwrap();
    assert_eq!(resend.provider(), "resend");
}

#[tokio::test]
async fn log_mailer_always_delivers() {
    let mailer = log::LogMailer;
    assert!(mailer.deliver(&submission(None)).await.is_ok());
}

#[test]
fn rejected_error_reports_status() {
    let err = MailError::Rejected { status: 400, body: "The user ID is invalid".into() };
    assert_eq!(err.to_string(), "mail provider rejected the request: status 400: The user ID is invalid");
}
