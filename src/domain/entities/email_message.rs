use crate::domain::entities::reset_code::ResetCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn reset_code(from: String, to: String, subject: String, code: &ResetCode) -> Self {
        Self {
            from,
            to,
            subject,
            body: format!("Your password reset code is: {}", code),
        }
    }
}
