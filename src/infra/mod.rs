use crate::adapter::crypto::code::OsRngCodeGenerator;
use crate::adapter::email::local::LocalEmailSender;
use crate::adapter::email::smtp::SMTPEmailSender;
use crate::application::interface::email::EmailSender;
use crate::infra::config::{AppConfig, EmailProvider};
use crate::infra::state::AppState;
use std::sync::Arc;
use tracing::info;

pub mod config;
pub mod setup;
pub mod app;
pub mod state;


fn email_sender(config: &AppConfig) -> anyhow::Result<Arc<dyn EmailSender>> {
    match config.email.provider {
        EmailProvider::Smtp => {
            info!("Using SMTP relay {}:{}", config.smtp.host, config.smtp.port);
            Ok(Arc::new(SMTPEmailSender::new(&config.smtp)?))
        }
        EmailProvider::Local => {
            info!("Writing emails to {}", config.email.local_output_dir);
            Ok(Arc::new(LocalEmailSender::new(&config.email.local_output_dir)))
        }
    }
}

pub fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let email_sender = email_sender(&config)?;

    Ok(AppState {
        config: Arc::new(config),
        email_sender,
        code_generator: Arc::new(OsRngCodeGenerator),
    })
}
