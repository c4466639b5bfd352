use cs_mailer::MailerConfig;

use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the embedded database file (default: data/curbshare.db)
    pub database_path: PathBuf,

    /// Simulated remote-call latency on login/register (default: 1000 ms)
    pub auth_latency: Duration,

    /// Log level (default: info)
    pub log_level: String,

    /// Enable colored logs (default: true)
    pub log_colored: bool,

    /// Optional log file path. None = stdout
    pub log_file: Option<PathBuf>,

    /// Outbound mail configuration
    pub mail: MailerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self {
            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/curbshare.db")),

            auth_latency: Duration::from_millis(
                std::env::var("AUTH_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),

            mail: MailerConfig::from_env(),
        }
    }
}
