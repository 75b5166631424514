//! Mail configuration parsed from environment variables.

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_MAIL_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MailConfigError {
    #[error("unknown MAIL_PROVIDER: {0}")]
    UnknownProvider(String),

    #[error("missing mail setting: env var {var} not set")]
    MissingVar { var: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key; required when the EmailJS account enforces strict mode.
    pub access_token: Option<String>,
    pub api_url: String,
    /// Forwarded as `to_email` so the template can route the message.
    pub inbox: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    EmailJs(EmailJsConfig),
    Resend(ResendConfig),
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub provider: ProviderConfig,
    pub request_timeout_secs: u64,
}

impl MailConfig {
    /// Build typed mail config from environment variables.
    ///
    /// - `MAIL_PROVIDER`: `log` (default), `emailjs` or `resend`
    /// - emailjs: `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    ///   `EMAILJS_PUBLIC_KEY` (required), `EMAILJS_ACCESS_TOKEN`,
    ///   `EMAILJS_API_URL`, `CONTACT_INBOX` (optional)
    /// - resend: `RESEND_API_KEY`, `RESEND_FROM`, `CONTACT_INBOX` (required)
    /// - `MAIL_REQUEST_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider or a missing required var.
    pub fn from_env() -> Result<Self, MailConfigError> {
        let provider = match std::env::var("MAIL_PROVIDER").ok().as_deref().map(str::trim) {
            None | Some("" | "log") => ProviderConfig::Log,
            Some("emailjs") => ProviderConfig::EmailJs(EmailJsConfig {
                service_id: required("EMAILJS_SERVICE_ID")?,
                template_id: required("EMAILJS_TEMPLATE_ID")?,
                public_key: required("EMAILJS_PUBLIC_KEY")?,
                access_token: optional("EMAILJS_ACCESS_TOKEN"),
                api_url: optional("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_owned()),
                inbox: optional("CONTACT_INBOX"),
            }),
            Some("resend") => ProviderConfig::Resend(ResendConfig {
                api_key: required("RESEND_API_KEY")?,
                from: required("RESEND_FROM")?,
                to: required("CONTACT_INBOX")?,
            }),
            Some(other) => return Err(MailConfigError::UnknownProvider(other.to_owned())),
        };

        let request_timeout_secs = std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MAIL_REQUEST_TIMEOUT_SECS);

        Ok(Self { provider, request_timeout_secs })
    }

    /// Log-only delivery with default timeouts.
    #[must_use]
    pub fn log_only() -> Self {
        Self { provider: ProviderConfig::Log, request_timeout_secs: DEFAULT_MAIL_REQUEST_TIMEOUT_SECS }
    }
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn required(var: &str) -> Result<String, MailConfigError> {
    optional(var).ok_or_else(|| MailConfigError::MissingVar { var: var.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
