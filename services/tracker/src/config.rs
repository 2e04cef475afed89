/// Tracker service configuration loaded from environment variables.
#[derive(Debug)]
pub struct TrackerConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// Cookie Domain attribute (e.g. "example.com").
    pub cookie_domain: String,
    /// TCP port to listen on (default 3000). Env var: `TRACKER_PORT`.
    pub tracker_port: u16,
    /// Mail API endpoint URL (JSON transport). Env var: `MAIL_API_URL`.
    pub mail_api_url: String,
    /// Mail API bearer token. Env var: `MAIL_API_KEY`.
    pub mail_api_key: String,
    /// Sender address for outbound mail. Env var: `MAIL_FROM`.
    pub mail_from: String,
    /// Document-render service endpoint URL. Env var: `RENDER_API_URL`.
    pub render_api_url: String,
    /// Recipient for emailed expense reports. Env var: `REPORT_RECIPIENT`.
    pub report_recipient: String,
    /// When set, the only address allowed to request a login code.
    /// Env var: `ALLOWED_EMAIL`.
    pub allowed_email: Option<String>,
    /// Remove a stored login code when its delivery fails (default false:
    /// the code stays verifiable). Env var: `INVALIDATE_CODE_ON_SEND_FAILURE`.
    pub invalidate_code_on_send_failure: bool,
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            tracker_port: std::env::var("TRACKER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            mail_api_url: std::env::var("MAIL_API_URL").expect("MAIL_API_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            render_api_url: std::env::var("RENDER_API_URL").expect("RENDER_API_URL"),
            report_recipient: std::env::var("REPORT_RECIPIENT").expect("REPORT_RECIPIENT"),
            allowed_email: std::env::var("ALLOWED_EMAIL").ok(),
            invalidate_code_on_send_failure: std::env::var("INVALIDATE_CODE_ON_SEND_FAILURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}
