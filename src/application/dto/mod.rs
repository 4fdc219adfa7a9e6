pub mod reset_code;
