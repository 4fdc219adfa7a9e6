use std::fmt;

use crate::application::app_error::AppError;

pub const MIN_RESET_CODE: u32 = 100_000;
pub const MAX_RESET_CODE: u32 = 999_999;
#[cfg(test)]
pub const RESET_CODE_LEN: usize = 6;

/// One-time password reset code: six ASCII digits, never starting with zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetCode(String);

// Accessors for checking codes handed back by other collaborators.
#[cfg(test)]
impl ResetCode {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        if value.len() != RESET_CODE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidResetCode);
        }
        let number: u32 = value.parse().map_err(|_| AppError::InvalidResetCode)?;
        Self::try_from(number)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u32 {
        // Constructors only admit in-range digit strings.
        self.0.parse().unwrap_or_default()
    }
}

impl TryFrom<u32> for ResetCode {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if !(MIN_RESET_CODE..=MAX_RESET_CODE).contains(&value) {
            return Err(AppError::InvalidResetCode);
        }
        Ok(Self(value.to_string()))
    }
}

impl fmt::Display for ResetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResetCode> for String {
    fn from(code: ResetCode) -> Self {
        code.0
    }
}
