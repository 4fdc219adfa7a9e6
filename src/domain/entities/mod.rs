pub mod email_message;
pub mod reset_code;
pub mod reset_request;
