//! REST helpers for the contact endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submission only happens
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result<(), SubmitFailure>`. The message is already phrased
//! for the form-level banner, and a 422 also carries the server's field
//! errors. Delivery failures never panic hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactResponse;
use crate::state::contact::{ContactFields, SubmitFailure};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again or call the office.";
pub const RATE_LIMITED: &str = "Too many requests. Please wait a moment and try again.";
pub const NETWORK_FAILURE: &str = "Could not reach the server. Check your connection and try again.";
pub const FIELDS_REJECTED: &str = "Please correct the highlighted fields.";

/// Failure for a non-2xx contact response.
///
/// Prefers the server's own message when it sent one, and keeps any field
/// errors so the form can highlight them.
#[must_use]
pub fn contact_failure(status: u16, body: Option<ContactResponse>) -> SubmitFailure {
    let (errors, message) = body.map(|b| (b.errors, b.message)).unwrap_or_default();
    let fallback = match status {
        429 => RATE_LIMITED,
        422 => FIELDS_REJECTED,
        _ => GENERIC_FAILURE,
    };
    let message = message.unwrap_or_else(|| fallback.to_owned());
    SubmitFailure { message, errors }
}

/// Post the form to `/api/contact`.
///
/// # Errors
///
/// Returns a [`SubmitFailure`] if the request cannot be sent or the server
/// rejects it.
pub async fn submit_contact(fields: &ContactFields) -> Result<(), SubmitFailure> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(super::types::CONTACT_PATH)
            .json(fields)
            .map_err(|e| SubmitFailure::new(e.to_string()))?;
        let resp = request.send().await.map_err(|e| {
            log::warn!("contact submit failed: {e}");
            SubmitFailure::new(NETWORK_FAILURE)
        })?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.json::<ContactResponse>().await.ok();
        Err(contact_failure(status, body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(SubmitFailure::new("not available on server"))
    }
}
