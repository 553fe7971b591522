/// Admin service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AdminConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing admin session tokens. Rotating it invalidates
    /// every outstanding session at once.
    pub jwt_secret: String,
    /// Mail API endpoint the login-code messages are posted to.
    pub mail_api_url: String,
    /// Bearer token for the mail API.
    pub mail_api_key: String,
    /// From address for outbound mail (e.g. "Folio <no-reply@example.com>").
    pub mail_from: String,
    /// Mail API request timeout in seconds (default 10). Env var: `MAIL_TIMEOUT_SECS`.
    pub mail_timeout_secs: u64,
    /// TCP port to listen on (default 3180). Env var: `ADMIN_PORT`.
    pub admin_port: u16,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            mail_api_url: std::env::var("MAIL_API_URL").expect("MAIL_API_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            mail_timeout_secs: std::env::var("MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            admin_port: std::env::var("ADMIN_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3180),
        }
    }
}
