use super::MailError;
use crate::application::{
    ApplicationResult,
    ports::mailer::{Mailer, OutgoingEmail},
};
use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, header::ContentType},
    transport::smtp::authentication::Credentials,
};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, from: &str) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port);

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: from.parse()?,
        })
    }
}

pub(super) fn build_message(from: &Mailbox, email: OutgoingEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(from.clone())
        .to(email.to.parse()?)
        .subject(email.subject);

    if let Some(reply_to) = email.reply_to {
        builder = builder.reply_to(reply_to.parse()?);
    }

    let message = match email.html_body {
        Some(html) => builder.multipart(MultiPart::alternative_plain_html(email.text_body, html))?,
        None => builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.text_body)?,
    };
    Ok(message)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> ApplicationResult<()> {
        let to = email.to.clone();
        let message = build_message(&self.from, email)?;
        self.transport.send(message).await.map_err(MailError::from)?;
        tracing::info!(to = %to, "email sent");
        Ok(())
    }
}
