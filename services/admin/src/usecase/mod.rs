pub mod login_code;
pub mod password;
pub mod token;
