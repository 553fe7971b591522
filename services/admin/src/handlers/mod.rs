pub mod login;
pub mod login_code;
pub mod token;
