use std::time::Duration;

/// Placeholder credential shipped in example configs. A public key equal to
/// this means "not configured": every dispatch routes through the local
/// fallback instead of the live transport.
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

const DEFAULT_SERVICE_ID: &str = "service_curbshare";
const DEFAULT_TEMPLATE_ID: &str = "template_curbshare";
const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_APP_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 2000;

/// Outbound mail configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Transport service identifier (MAIL_SERVICE_ID)
    pub service_id: String,

    /// Mail template identifier (MAIL_TEMPLATE_ID)
    pub template_id: String,

    /// Public API credential (MAIL_PUBLIC_KEY); the placeholder default
    /// keeps the dispatcher in fallback mode
    pub public_key: String,

    /// Template-mail API endpoint (MAIL_API_URL)
    pub api_url: String,

    /// Origin used to build reset links (APP_BASE_URL)
    pub app_base_url: String,

    /// Latency the fallback path simulates (MAIL_LATENCY_MS)
    pub simulated_latency: Duration,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            app_base_url: DEFAULT_APP_BASE_URL.to_string(),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
        }
    }
}

impl MailerConfig {
    /// Load configuration from environment variables; every value has a
    /// default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service_id: std::env::var("MAIL_SERVICE_ID").unwrap_or(defaults.service_id),
            template_id: std::env::var("MAIL_TEMPLATE_ID").unwrap_or(defaults.template_id),
            public_key: std::env::var("MAIL_PUBLIC_KEY").unwrap_or(defaults.public_key),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            app_base_url: std::env::var("APP_BASE_URL").unwrap_or(defaults.app_base_url),
            simulated_latency: std::env::var("MAIL_LATENCY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_latency),
        }
    }

    /// Whether real transport credentials are present.
    ///
    /// Evaluated on every dispatch call, so swapping the config takes
    /// effect immediately.
    pub fn is_configured(&self) -> bool {
        !self.public_key.is_empty() && self.public_key != PLACEHOLDER_PUBLIC_KEY
    }
}
