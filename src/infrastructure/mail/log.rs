use crate::application::{
    ApplicationResult,
    ports::mailer::{Mailer, OutgoingEmail},
};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> ApplicationResult<()> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.text_body,
            "SMTP not configured; email logged instead of sent"
        );
        Ok(())
    }
}
