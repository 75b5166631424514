//! Mail delivery for contact requests.
//!
//! DESIGN
//! ======
//! `MailDelivery` is the seam the contact route talks to. `build_mailer`
//! picks an implementation from `MailConfig`: EmailJS REST, Resend, or a
//! log-only sink for local runs and unconfigured deployments.

pub mod config;
pub mod emailjs;
pub mod log;
pub mod resend;

use std::sync::Arc;
use std::time::Duration;

use site::state::contact::ContactSubmission;

use config::{MailConfig, ProviderConfig};

pub const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response.
    #[error("mail request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("mail provider rejected the request: status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Provider-neutral async delivery. Enables stubbing in route tests.
#[async_trait::async_trait]
pub trait MailDelivery: Send + Sync {
    /// Short provider name for logs.
    fn provider(&self) -> &'static str;

    /// Deliver one validated contact request to the practice inbox.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the provider is unreachable or refuses the
    /// message.
    async fn deliver(&self, request: &ContactSubmission) -> Result<(), MailError>;
}

/// Build the configured mailer.
///
/// # Errors
///
/// Returns an error if the provider's HTTP client fails to build.
pub fn build_mailer(config: MailConfig) -> Result<Arc<dyn MailDelivery>, MailError> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let mailer: Arc<dyn MailDelivery> = match config.provider {
        ProviderConfig::EmailJs(cfg) => Arc::new(emailjs::EmailJsMailer::new(cfg, timeout)?),
        ProviderConfig::Resend(cfg) => Arc::new(resend::ResendMailer::new(cfg)),
        ProviderConfig::Log => Arc::new(log::LogMailer),
    };
    Ok(mailer)
}

/// Subject line shared by the providers that set one.
#[must_use]
pub fn subject_for(request: &ContactSubmission) -> String {
    match &request.service {
        Some(service) => format!("Appointment request: {service} ({})", request.name),
        None => format!("Appointment request from {}", request.name),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
