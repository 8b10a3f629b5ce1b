// src/main.rs

use anyhow::Context;
use log::{error, info};
use startup_buddy::{config, logging, ui, App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    let log_dir = config::config_dir().context("Failed to resolve config directory")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    let _logger = logging::init_logging(&log_dir, &config.log_level)
        .context("Failed to initialize logging")?;

    info!(
        "Starting {} (reply delay {:?}, theme {})",
        startup_buddy::constants::APP_TITLE,
        config.reply_delay(),
        config.theme
    );

    let app = App::new(&config).context("Failed to build application state")?;
    if let Err(e) = ui::run_ui(app, config.tick_rate()).await {
        error!("UI terminated with error: {}", e);
        return Err(e.into());
    }

    info!("Goodbye");
    Ok(())
}
