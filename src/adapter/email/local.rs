use crate::application::{
    app_error::{AppError, AppResult},
    interface::email::EmailSender
};
use crate::domain::entities::email_message::EmailMessage;
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use uuid::Uuid;

/// Development sender: every message lands in `output_dir` as a text file.
#[derive(Clone)]
pub struct LocalEmailSender {
    output_dir: PathBuf,
}

impl LocalEmailSender {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl EmailSender for LocalEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|err| AppError::EmailSendError(err.to_string()))?;
        let file_name = format!(
            "{}_{}.txt",
            Utc::now().format("%Y%m%d%H%M%S"),
            Uuid::now_v7()
        );
        let file_path = self.output_dir.join(file_name);
        let contents = format!(
            "From: {}\nTo: {}\nSubject: {}\n\n{}\n",
            message.from, message.to, message.subject, message.body
        );
        tokio::fs::write(file_path, contents)
            .await
            .map_err(|err| AppError::EmailSendError(err.to_string()))?;
        Ok(())
    }
}
