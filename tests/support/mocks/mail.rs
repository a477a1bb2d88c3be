// tests/support/mocks/mail.rs
use async_trait::async_trait;
use easyrent::application::{
    ApplicationResult,
    ports::mailer::{Mailer, OutgoingEmail},
};
use std::sync::Mutex;

/// Keeps every email instead of sending it.
#[derive(Debug, Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl CapturingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<OutgoingEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send(&self, email: OutgoingEmail) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
