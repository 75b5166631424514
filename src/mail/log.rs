//! Log-only sink used when no provider is configured.

use site::state::contact::ContactSubmission;

use super::{MailDelivery, MailError};

pub struct LogMailer;

#[async_trait::async_trait]
impl MailDelivery for LogMailer {
    fn provider(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, request: &ContactSubmission) -> Result<(), MailError> {
        tracing::info!(
            name = %request.name,
            email = %request.email,
            phone = ?request.phone,
            service = ?request.service,
            message_len = request.message.len(),
            "contact request received (log-only delivery)"
        );
        Ok(())
    }
}
