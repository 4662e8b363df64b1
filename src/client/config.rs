use std::env;

/// Client-side settings, all overridable from the environment (a `.env`
/// file is honored when present).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without trailing slash.
    pub api_base_url: String,
    /// User id of the fixed support counterpart every member writes to.
    pub support_admin_id: i64,
    /// Number behind the wa.me donation hand-off link.
    pub whatsapp_number: String,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
            support_admin_id: env::var("SUPPORT_ADMIN_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            whatsapp_number: env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "905338748646".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
