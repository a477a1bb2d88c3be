//! Outgoing mail. [`SmtpMailer`] relays through an SMTP server;
//! [`LogMailer`] only logs and is used when `SMTP_HOST` is unset.
mod log;
mod smtp;

pub use log::LogMailer;
pub use smtp::SmtpMailer;

use crate::application::error::ApplicationError;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("email build error: {0}")]
    Build(#[from] lettre::error::Error),
}

impl From<MailError> for ApplicationError {
    fn from(err: MailError) -> Self {
        ApplicationError::infrastructure(err.to_string())
    }
}
