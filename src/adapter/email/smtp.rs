use std::time::Duration;

use crate::{
    application::{
        app_error::{AppError, AppResult},
        interface::email::EmailSender,
    },
    domain::entities::email_message::EmailMessage,
    infra::config::{SMTPConfig, SmtpTls},
};
use async_trait::async_trait;
use lettre::{
    message::Mailbox, transport::smtp::{authentication::Credentials, AsyncSmtpTransport}, AsyncTransport,
    Message,
    Tokio1Executor,
};
use secrecy::ExposeSecret;

#[derive(Clone)]
pub struct SMTPEmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    // Deadline for the whole send, connection included.
    timeout: Duration,
}

impl SMTPEmailSender {
    pub fn new(config: &SMTPConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut transport = match config.tls {
            SmtpTls::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|err| AppError::EmailSendError(err.to_string()))?,
            SmtpTls::Starttls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|err| AppError::EmailSendError(err.to_string()))?,
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
        }
        .port(config.port);
        if !config.username.is_empty() {
            transport = transport.credentials(Credentials::new(
                config.username.clone(),
                config.password.expose_secret().clone(),
            ));
        }
        Ok(Self {
            mailer: transport.build(),
            timeout,
        })
    }
}

#[async_trait]
impl EmailSender for SMTPEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        let from: Mailbox = message
            .from
            .parse()
            .map_err(|_| AppError::EmailSendError("Invalid FROM email address".to_string()))?;
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|_| AppError::EmailSendError("Invalid TO email address".to_string()))?;
        let email = Message::builder()
            .to(to)
            .subject(message.subject.as_str())
            .from(from)
            .body(message.body.clone())
            .map_err(|err| AppError::EmailSendError(err.to_string()))?;
        tokio::time::timeout(self.timeout, self.mailer.send(email))
            .await
            .map_err(|_| AppError::EmailSendTimeout(self.timeout))?
            .map_err(|err| AppError::EmailSendError(err.to_string()))?;
        Ok(())
    }
}
