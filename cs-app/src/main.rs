use cs_app::{App, AppConfig, logger};

use cs_auth::SessionState;

use std::error::Error;

use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env();

    logger::initialize(&config.log_level, config.log_file.clone(), config.log_colored)?;

    info!("Starting curbshare v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Opening identity store at {}",
        config.database_path.display()
    );

    let app = App::open(&config).await?;

    match app.restore_session().await {
        SessionState::Authenticated(profile) => {
            info!("Active session: {} ({})", profile.name, profile.email);
        }
        _ => info!("No active session"),
    }

    let stats = app.stats().await?;
    info!(
        "Identity store ready: {} users ({} guests, {} hosts)",
        stats.total, stats.guests, stats.hosts
    );

    if config.mail.is_configured() {
        info!("Mail transport configured");
    } else {
        info!("Mail transport not configured; account-recovery mail will be simulated");
    }

    Ok(())
}
