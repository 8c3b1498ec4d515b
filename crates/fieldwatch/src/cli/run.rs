//! Bot execution.

use fieldwatch::FieldwatchConfig;
use fieldwatch_discord::StatusBot;
use fieldwatch_status::HttpStatusFetcher;
use std::sync::Arc;
use tracing::info;

/// Logs the effective configuration.
pub fn check_config(config: &FieldwatchConfig) {
    info!(
        source_url = %config.source_url(),
        channel_id = config.channel_id(),
        poll_interval_secs = config.poll_interval_secs(),
        cooldown_secs = config.cooldown_secs(),
        fetch_timeout_secs = config.fetch_timeout_secs(),
        "Configuration is valid"
    );
}

/// Runs the bot until the client stops or CTRL+C is received.
pub async fn run_bot(
    config: &FieldwatchConfig,
    discord_token: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = discord_token.ok_or("DISCORD_TOKEN not provided")?;

    let source = Arc::new(HttpStatusFetcher::with_timeout(
        config.source_url(),
        config.fetch_timeout(),
    ));
    let mut bot = StatusBot::new(
        token,
        *config.channel_id(),
        source,
        config.sync_settings(),
    )
    .await?;

    info!("Fieldwatch running. Press CTRL+C to shutdown.");

    tokio::select! {
        result = bot.start() => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received, stopping");
        }
    }

    Ok(())
}
