pub mod crypto;
pub mod email;
pub mod http;
