use std::time::Duration;

use thiserror::Error;
use validator::ValidationErrors;

const EMAIL_SEND_FAILED: &str = "Error sending email";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::Internal => "internal",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Invalid reset code")]
    InvalidResetCode,
    #[error("Email send error: {0}")]
    EmailSendError(String),
    #[error("Email send timed out after {0:?}")]
    EmailSendTimeout(Duration),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgument(_) | AppError::InvalidResetCode => ErrorKind::InvalidArgument,
            AppError::EmailSendError(_) | AppError::EmailSendTimeout(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to return to the caller. Internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidArgument(message) => message.clone(),
            AppError::InvalidResetCode => self.to_string(),
            AppError::EmailSendError(_) | AppError::EmailSendTimeout(_) => EMAIL_SEND_FAILED.to_string(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::InvalidArgument(message)
    }
}

pub type AppResult<T> = Result<T, AppError>;
