pub mod code;
pub mod email;
