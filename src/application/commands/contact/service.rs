use std::sync::Arc;

use tracing::info;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    notifications::{ContactSubmission, contact_form_email},
    ports::mailer::Mailer,
};

pub struct ContactFormCommand {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub message: String,
}

/// Public "contact us" form forwarded to the support inbox.
pub struct ContactFormService {
    mailer: Arc<dyn Mailer>,
    inbox: String,
}

impl ContactFormService {
    pub fn new(mailer: Arc<dyn Mailer>, inbox: impl Into<String>) -> Self {
        Self {
            mailer,
            inbox: inbox.into(),
        }
    }

    pub async fn submit(&self, command: ContactFormCommand) -> ApplicationResult<()> {
        for (field, value) in [
            ("name", &command.name),
            ("email", &command.email),
            ("phone", &command.phone),
            ("address", &command.address),
            ("message", &command.message),
        ] {
            if value.trim().is_empty() {
                return Err(ApplicationError::validation(format!(
                    "{field} is required"
                )));
            }
        }
        if !command.email.contains('@') {
            return Err(ApplicationError::validation("email is not valid"));
        }

        let email = contact_form_email(
            &self.inbox,
            &ContactSubmission {
                name: command.name.trim(),
                email: command.email.trim(),
                phone: command.phone.trim(),
                address: command.address.trim(),
                message: &command.message,
            },
        );
        self.mailer.send(email).await?;
        info!(inbox = %self.inbox, "contact form forwarded");
        Ok(())
    }
}
