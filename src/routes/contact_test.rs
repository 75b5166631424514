use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use site::state::contact::{ContactPolicy, ContactSubmission, EMAIL_INVALID, Field, NAME_REQUIRED};

use super::*;
use crate::mail::MailDelivery;
use crate::rate_limit::{RateLimitConfig, RateLimiter};

// =========================================================================
// StubMailer
// =========================================================================

struct StubMailer {
    fail: bool,
    delivered: Mutex<Vec<ContactSubmission>>,
}

impl StubMailer {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self { fail, delivered: Mutex::new(Vec::new()) })
    }

    fn delivered(&self) -> Vec<ContactSubmission> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailDelivery for StubMailer {
    fn provider(&self) -> &'static str {
        "stub"
    }

    async fn deliver(&self, request: &ContactSubmission) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Rejected { status: 500, body: "upstream down".into() });
        }
        self.delivered.lock().unwrap().push(request.clone());
        Ok(())
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn state_with(mailer: Arc<StubMailer>, per_client_limit: usize) -> AppState {
    let limiter = RateLimiter::new(RateLimitConfig {
        per_client_limit,
        per_client_window: Duration::from_secs(600),
        global_limit: 100,
        global_window: Duration::from_secs(3600),
    });
    AppState::new(mailer, limiter, ContactPolicy::default())
}

fn peer() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 7)), 40_000))
}

fn fields(name: &str, email: &str, phone: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        service: String::new(),
        message: message.into(),
    }
}

async fn post(state: &AppState, body: ContactFields) -> (StatusCode, ContactResponse) {
    let (status, Json(resp)) = submit_contact(State(state.clone()), peer(), Ok(Json(body))).await;
    (status, resp)
}

// =========================================================================
// submit_contact
// =========================================================================

#[tokio::test]
async fn valid_request_is_delivered() {
    let mailer = StubMailer::new(false);
    let state = state_with(mailer.clone(), 5);

    let (status, resp) = post(&state, fields(" Jo ", "jo@example.com", "555", "hi")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, ContactResponse::accepted());

    let delivered = mailer.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Jo");
}

#[tokio::test]
async fn empty_name_returns_422_with_name_error_only() {
    let mailer = StubMailer::new(false);
    let state = state_with(mailer.clone(), 5);

    let (status, resp) = post(&state, fields("", "a@b.com", "555", "hi")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!resp.ok);
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors.get(&Field::Name).map(String::as_str), Some(NAME_REQUIRED));
    assert!(mailer.delivered().is_empty());
}

#[tokio::test]
async fn bad_email_returns_422_with_email_error_only() {
    let state = state_with(StubMailer::new(false), 5);

    let (status, resp) = post(&state, fields("Jo", "bad-email", "555", "hi")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors.get(&Field::Email).map(String::as_str), Some(EMAIL_INVALID));
}

#[tokio::test]
async fn unknown_service_is_rejected() {
    let state = state_with(StubMailer::new(false), 5);
    let mut body = fields("Jo", "jo@example.com", "555", "hi");
    body.service = "Hair Transplant".into();

    let (status, resp) = post(&state, body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.errors.contains_key(&Field::Service));
}

#[tokio::test]
async fn rate_limit_returns_429_after_limit() {
    let mailer = StubMailer::new(false);
    let state = state_with(mailer.clone(), 2);
    let body = fields("Jo", "jo@example.com", "555", "hi");

    for _ in 0..2 {
        let (status, _) = post(&state, body.clone()).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, resp) = post(&state, body).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.message.as_deref(), Some(RATE_LIMITED));
    assert_eq!(mailer.delivered().len(), 2);
}

#[tokio::test]
async fn invalid_requests_do_not_consume_quota() {
    let state = state_with(StubMailer::new(false), 1);

    for _ in 0..3 {
        let (status, _) = post(&state, fields("", "a@b.com", "555", "hi")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
    let (status, _) = post(&state, fields("Jo", "jo@example.com", "555", "hi")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delivery_failure_returns_502() {
    let state = state_with(StubMailer::new(true), 5);

    let (status, resp) = post(&state, fields("Jo", "jo@example.com", "555", "hi")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!resp.ok);
    assert_eq!(resp.message.as_deref(), Some(DELIVERY_FAILED));
}

#[test]
fn mail_errors_map_to_statuses() {
    assert_eq!(mail_error_to_status(&MailError::Request("timeout".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        mail_error_to_status(&MailError::Rejected { status: 400, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        mail_error_to_status(&MailError::HttpClientBuild("tls".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn error_envelope_serializes_without_empty_fields() {
    let json = serde_json::to_value(ContactResponse::failed(RATE_LIMITED)).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": false, "message": RATE_LIMITED }));
}
