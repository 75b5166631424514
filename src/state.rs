//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the mail delivery seam, the contact rate limiter, and the content
//! record the contact route validates service names against.

use std::sync::Arc;

use site::content::DoctorProfile;
use site::state::contact::ContactPolicy;

use crate::mail::MailDelivery;
use crate::rate_limit::RateLimiter;

/// Clone is required by Axum; every field is Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn MailDelivery>,
    pub rate_limiter: RateLimiter,
    pub profile: Arc<DoctorProfile>,
    pub policy: ContactPolicy,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Arc<dyn MailDelivery>, rate_limiter: RateLimiter, policy: ContactPolicy) -> Self {
        Self { mailer, rate_limiter, profile: Arc::new(DoctorProfile::dr_gari()), policy }
    }
}
