use validator::Validate;

use crate::application::app_error::{AppError, AppResult};

pub const EMAIL_REQUIRED: &str = "Email required";

/// Incoming reset request. Only presence is checked: any non-empty string is
/// accepted as an address and left to the mail relay to judge.
#[derive(Debug, Clone, Default, Validate)]
pub struct ResetRequest {
    #[validate(
        required(message = "Email required"),
        length(min = 1, message = "Email required")
    )]
    pub email: Option<String>,
}

impl ResetRequest {
    pub fn new(email: Option<String>) -> Self {
        Self { email }
    }

    pub fn into_email(self) -> AppResult<String> {
        self.validate()?;
        self.email
            .ok_or_else(|| AppError::InvalidArgument(EMAIL_REQUIRED.to_string()))
    }
}
