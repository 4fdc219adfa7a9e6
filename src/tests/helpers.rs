#![cfg(test)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing_subscriber::fmt::MakeWriter;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::email::EmailSender;
use crate::domain::entities::email_message::EmailMessage;

/// Email sender stub that records every dispatch attempt.
#[derive(Clone, Default)]
pub struct RecordingEmailSender {
    attempts: Arc<Mutex<Vec<EmailMessage>>>,
    failure: Option<String>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            attempts: Arc::default(),
            failure: Some(reason.to_string()),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.lock().expect("attempts lock").len()
    }

    /// Messages handed to the sender, including failed attempts.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.attempts.lock().expect("attempts lock").clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        self.attempts.lock().expect("attempts lock").push(message.clone());
        match &self.failure {
            Some(reason) => Err(AppError::EmailSendError(reason.clone())),
            None => Ok(()),
        }
    }
}

/// In-memory log sink for asserting on emitted `tracing` events.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().expect("log buffer lock")).into_owned()
    }

    pub fn lines_at(&self, level: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(level))
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
