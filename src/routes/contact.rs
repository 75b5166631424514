//! Contact form endpoint.
//!
//! `POST /api/contact` re-runs the browser's validator, applies the rate
//! limits, then hands the request to the configured mail provider.
//!
//! | outcome            | status | body                                  |
//! |--------------------|--------|---------------------------------------|
//! | delivered          | 200    | `{"ok":true}`                         |
//! | malformed JSON     | 400    | `{"ok":false,"message":..}`           |
//! | invalid fields     | 422    | `{"ok":false,"errors":{field: msg}}`  |
//! | rate limited       | 429    | `{"ok":false,"message":..}`           |
//! | delivery failed    | 502    | `{"ok":false,"message":..}`           |

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use site::net::api::RATE_LIMITED;
use site::net::types::ContactResponse;
use site::state::contact::{ContactFields, validate};

use crate::mail::MailError;
use crate::state::AppState;

pub const MALFORMED_BODY: &str = "The request could not be read. Please reload the page and try again.";
pub const DELIVERY_FAILED: &str = "We couldn't send your message right now. Please try again or call the office.";

/// `POST /api/contact`.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    payload: Result<Json<ContactFields>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let Json(fields) = match payload {
        Ok(fields) => fields,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "contact payload rejected");
            return (StatusCode::BAD_REQUEST, Json(ContactResponse::failed(MALFORMED_BODY)));
        }
    };

    let submission = match validate(&fields, state.policy, &state.profile) {
        Ok(submission) => submission,
        Err(errors) => {
            tracing::debug!(fields = errors.len(), "contact payload failed validation");
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ContactResponse::invalid(errors)));
        }
    };

    if let Err(e) = state.rate_limiter.check_and_record(addr.ip()) {
        tracing::warn!(client = %addr.ip(), error = %e, "contact request rate limited");
        return (StatusCode::TOO_MANY_REQUESTS, Json(ContactResponse::failed(RATE_LIMITED)));
    }

    match state.mailer.deliver(&submission).await {
        Ok(()) => {
            tracing::info!(provider = state.mailer.provider(), service = ?submission.service, "contact request delivered");
            (StatusCode::OK, Json(ContactResponse::accepted()))
        }
        Err(e) => {
            tracing::error!(provider = state.mailer.provider(), error = %e, "contact delivery failed");
            (mail_error_to_status(&e), Json(ContactResponse::failed(DELIVERY_FAILED)))
        }
    }
}

/// Status for a failed delivery. Provider trouble is reported as a bad gateway.
#[must_use]
pub fn mail_error_to_status(err: &MailError) -> StatusCode {
    match err {
        MailError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MailError::Request(_) | MailError::Rejected { .. } => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
