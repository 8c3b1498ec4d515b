//! Serenity event handler for the status bot.

use crate::{DiscordChannel, DiscordError, DiscordErrorKind, DiscordResult, report_embed};
use async_trait::async_trait;
use fieldwatch_status::StatusSource;
use fieldwatch_sync::{StatusQuery, SyncEngine, SyncSettings};
use serenity::all::{
    Command, CommandInteraction, Context, CreateCommand, EditInteractionResponse, EventHandler,
    GatewayIntents, Http, Interaction, Ready,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, instrument, warn};

/// Name of the on-demand status slash command.
pub const STATUS_COMMAND: &str = "status";

/// Reply shown when a `/status` request cannot be answered.
pub const QUERY_FAILED_REPLY: &str = "❌ Could not retrieve the server status.";

/// Event handler for the Fieldwatch Discord bot.
///
/// Starts the sync loop on the first `ready` and answers `/status`.
pub struct StatusHandler {
    channel_id: u64,
    source: Arc<dyn StatusSource>,
    settings: SyncSettings,
    query: StatusQuery,
    sync_started: AtomicBool,
}

impl StatusHandler {
    /// Creates a handler publishing to `channel_id`.
    pub fn new(channel_id: u64, source: Arc<dyn StatusSource>, settings: SyncSettings) -> Self {
        Self {
            channel_id,
            query: StatusQuery::new(source.clone()),
            source,
            settings,
            sync_started: AtomicBool::new(false),
        }
    }

    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES
    }

    /// Definition of the `/status` command.
    pub fn status_command() -> CreateCommand {
        CreateCommand::new(STATUS_COMMAND).description("Show the current Farming Simulator server status")
    }

    /// Whether the sync loop has been spawned.
    pub fn sync_started(&self) -> bool {
        self.sync_started.load(Ordering::SeqCst)
    }

    /// Spawns the sync loop unless it is already running.
    ///
    /// Gateway reconnects fire `ready` again; only the first one starts a loop.
    fn start_sync(&self, ctx: &Context) {
        if self.sync_started.swap(true, Ordering::SeqCst) {
            debug!("Sync loop already running");
            return;
        }

        let channel = match DiscordChannel::new(ctx.http.clone(), self.channel_id) {
            Ok(channel) => channel,
            Err(e) => {
                error!(error = %e, "Cannot start sync loop");
                self.sync_started.store(false, Ordering::SeqCst);
                return;
            }
        };

        let engine = SyncEngine::new(self.source.clone(), channel, self.settings);
        tokio::spawn(engine.run());
        info!(channel_id = self.channel_id, "Sync loop spawned");
    }

    /// Registers `/status` as a global command, returning how many commands
    /// Discord now knows.
    ///
    /// # Errors
    /// Returns [`DiscordErrorKind::CommandRegistration`] if Discord rejects the
    /// registration or the client has no application id yet.
    pub async fn register_commands(http: &Arc<Http>) -> DiscordResult<usize> {
        let commands = Command::set_global_commands(http, vec![Self::status_command()])
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::CommandRegistration(e.to_string())))?;
        Ok(commands.len())
    }

    #[instrument(skip(self, ctx, command), fields(user = %command.user.id))]
    async fn answer_status(&self, ctx: &Context, command: &CommandInteraction) -> DiscordResult<()> {
        command.defer(&ctx.http).await?;

        let report = self.query.report().await;
        let reply = EditInteractionResponse::new().embed(report_embed(&report));
        if let Err(e) = command.edit_response(&ctx.http, reply).await {
            let fallback = EditInteractionResponse::new().content(QUERY_FAILED_REPLY);
            command.edit_response(&ctx.http, fallback).await?;
            return Err(DiscordError::new(DiscordErrorKind::InteractionFailed(
                e.to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for StatusHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Discord bot connected"
        );

        match Self::register_commands(&ctx.http).await {
            Ok(count) => info!(count, "Registered slash commands"),
            Err(e) => warn!(error = %e, "Failed to register slash commands"),
        }

        self.start_sync(&ctx);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        if command.data.name == STATUS_COMMAND {
            if let Err(e) = self.answer_status(&ctx, &command).await {
                error!(error = %e, "Failed to answer status command");
            }
        } else {
            debug!(command = %command.data.name, "Ignoring unknown command");
        }
    }
}
