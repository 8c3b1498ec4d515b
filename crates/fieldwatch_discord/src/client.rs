//! Discord bot client setup and lifecycle management.

use crate::{DiscordError, DiscordErrorKind, DiscordResult, StatusHandler};
use fieldwatch_status::StatusSource;
use fieldwatch_sync::SyncSettings;
use serenity::Client;
use std::sync::Arc;
use tracing::{info, instrument};

/// Discord client for the status bot.
///
/// # Example
/// ```no_run
/// use fieldwatch_discord::StatusBot;
/// use fieldwatch_status::HttpStatusFetcher;
/// use fieldwatch_sync::SyncSettings;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let source = Arc::new(HttpStatusFetcher::new("http://127.0.0.1:8080/stats.xml"));
///
///     let mut bot = StatusBot::new(token, 1234567890, source, SyncSettings::default()).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct StatusBot {
    client: Client,
}

impl StatusBot {
    /// Create a new StatusBot.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The bot token is empty
    /// - The channel id is zero
    /// - The Serenity client fails to initialize
    #[instrument(skip(token, source), fields(token_len = token.len(), source = %source.describe()))]
    pub async fn new(
        token: String,
        channel_id: u64,
        source: Arc<dyn StatusSource>,
        settings: SyncSettings,
    ) -> DiscordResult<Self> {
        info!("Initializing Fieldwatch Discord bot");

        if token.trim().is_empty() {
            return Err(DiscordError::new(DiscordErrorKind::InvalidToken));
        }
        if channel_id == 0 {
            return Err(DiscordError::new(DiscordErrorKind::InvalidId(
                "channel id must be non-zero".to_string(),
            )));
        }

        let handler = StatusHandler::new(channel_id, source, settings);
        let intents = StatusHandler::intents();

        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        info!("Serenity client built successfully");

        Ok(Self { client })
    }

    /// Start the Discord bot.
    ///
    /// Blocks until the client shuts down.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
