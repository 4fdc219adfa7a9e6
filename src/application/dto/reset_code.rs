use crate::domain::entities::reset_code::ResetCode;

#[derive(Debug)]
pub struct SendResetCodeDTO {
    pub email: Option<String>,
    pub from: String,
    pub subject: String,
}

#[derive(Debug, Clone)]
pub struct ResetCodeSentDTO {
    pub code: ResetCode,
}
