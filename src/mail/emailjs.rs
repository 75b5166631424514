//! EmailJS REST client.
//!
//! Thin HTTP wrapper for `/api/v1.0/email/send`. The template receives the
//! same field names the browser form posts (`name`, `email`, `phone`,
//! `service`, `message`). Body construction is pure for testability.

use std::time::Duration;

use serde::Serialize;
use site::state::contact::ContactSubmission;

use super::config::EmailJsConfig;
use super::{CONNECT_TIMEOUT_SECS, MailDelivery, MailError, subject_for};

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsMailer {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsMailer {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: EmailJsConfig, timeout: Duration) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| MailError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait]
impl MailDelivery for EmailJsMailer {
    fn provider(&self) -> &'static str {
        "emailjs"
    }

    async fn deliver(&self, request: &ContactSubmission) -> Result<(), MailError> {
        let body = send_request(&self.config, request);

        let response = self
            .http
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(MailError::Rejected { status: status.as_u16(), body: text })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    message: &'a str,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_email: Option<&'a str>,
}

pub(crate) fn send_request<'a>(config: &'a EmailJsConfig, request: &'a ContactSubmission) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.access_token.as_deref(),
        template_params: TemplateParams {
            name: &request.name,
            email: &request.email,
            phone: request.phone.as_deref().unwrap_or(""),
            service: request.service.as_deref().unwrap_or(""),
            message: &request.message,
            subject: subject_for(request),
            to_email: config.inbox.as_deref(),
        },
    }
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
