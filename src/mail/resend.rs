//! Resend delivery with an HTML template.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use site::state::contact::ContactSubmission;

use super::config::ResendConfig;
use super::{MailDelivery, MailError, subject_for};

const CONTACT_REQUEST_TEMPLATE: &str = include_str!("../../templates/contact_request.html");

pub struct ResendMailer {
    client: Resend,
    from: String,
    to: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: ResendConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from, to: config.to }
    }
}

#[async_trait::async_trait]
impl MailDelivery for ResendMailer {
    fn provider(&self) -> &'static str {
        "resend"
    }

    async fn deliver(&self, request: &ContactSubmission) -> Result<(), MailError> {
        let to = [self.to.as_str()];
        let subject = subject_for(request);
        let html = render_contact_template(request);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| MailError::Request(e.to_string()))?;
        Ok(())
    }
}

/// Fill the template. Every value is HTML-escaped since it is visitor input.
#[must_use]
pub fn render_contact_template(request: &ContactSubmission) -> String {
    CONTACT_REQUEST_TEMPLATE
        .replace("{{NAME}}", &escape_html(&request.name))
        .replace("{{EMAIL}}", &escape_html(&request.email))
        .replace("{{PHONE}}", &escape_html(request.phone.as_deref().unwrap_or("Not provided")))
        .replace("{{SERVICE}}", &escape_html(request.service.as_deref().unwrap_or("No preference")))
        .replace("{{MESSAGE}}", &escape_html(&request.message))
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "resend_test.rs"]
mod tests;
