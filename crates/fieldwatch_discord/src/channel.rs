//! Report channel backed by a Discord text channel.

use crate::{DiscordError, DiscordErrorKind, DiscordResult, report_embed};
use async_trait::async_trait;
use fieldwatch_core::StatusReport;
use fieldwatch_error::{ChannelError, ChannelErrorKind};
use fieldwatch_sync::{AuthorId, ChannelMessage, ChannelResult, MessageId, ReportChannel};
use serenity::all::{ChannelId, CreateMessage, EditMessage, GetMessages, Http};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

/// A Discord text channel that holds the live status report.
///
/// Any message carrying an embed counts as a report. The bot's own user id
/// is looked up once and reused.
pub struct DiscordChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
    identity: OnceCell<AuthorId>,
}

impl DiscordChannel {
    /// Creates a channel handle sharing the bot's HTTP client.
    ///
    /// # Errors
    /// Returns an error if `channel_id` is zero, which is not a valid snowflake.
    pub fn new(http: Arc<Http>, channel_id: u64) -> DiscordResult<Self> {
        if channel_id == 0 {
            return Err(DiscordError::new(DiscordErrorKind::InvalidId(
                "channel id must be non-zero".to_string(),
            )));
        }
        Ok(Self {
            http,
            channel_id: ChannelId::new(channel_id),
            identity: OnceCell::new(),
        })
    }

    /// The target channel.
    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }
}

#[async_trait]
impl ReportChannel for DiscordChannel {
    #[instrument(skip(self), fields(channel_id = %self.channel_id))]
    async fn recent_messages(&self, limit: u8) -> ChannelResult<Vec<ChannelMessage>> {
        let messages = self
            .channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await
            .map_err(|e| ChannelError::new(ChannelErrorKind::ListFailed(e.to_string())))?;

        debug!(count = messages.len(), "Fetched recent messages");
        Ok(messages
            .into_iter()
            .map(|message| ChannelMessage {
                id: MessageId(message.id.get()),
                author: AuthorId(message.author.id.get()),
                has_report: !message.embeds.is_empty(),
            })
            .collect())
    }

    #[instrument(skip(self, report), fields(channel_id = %self.channel_id))]
    async fn send_report(&self, report: &StatusReport) -> ChannelResult<MessageId> {
        let message = self
            .channel_id
            .send_message(&self.http, CreateMessage::new().embed(report_embed(report)))
            .await
            .map_err(|e| ChannelError::new(ChannelErrorKind::SendFailed(e.to_string())))?;
        Ok(MessageId(message.id.get()))
    }

    #[instrument(skip(self, report), fields(channel_id = %self.channel_id, message_id = %id))]
    async fn edit_report(&self, id: MessageId, report: &StatusReport) -> ChannelResult<()> {
        self.channel_id
            .edit_message(
                &self.http,
                serenity::all::MessageId::new(id.0),
                EditMessage::new().embed(report_embed(report)),
            )
            .await
            .map_err(|e| {
                ChannelError::new(ChannelErrorKind::EditFailed {
                    message_id: id.0,
                    reason: e.to_string(),
                })
            })?;
        Ok(())
    }

    async fn own_identity(&self) -> ChannelResult<AuthorId> {
        let id = self
            .identity
            .get_or_try_init(|| async {
                let user = self.http.get_current_user().await.map_err(|e| {
                    ChannelError::new(ChannelErrorKind::IdentityUnavailable(e.to_string()))
                })?;
                debug!(bot_id = %user.id, "Resolved own identity");
                Ok::<_, ChannelError>(AuthorId(user.id.get()))
            })
            .await?;
        Ok(*id)
    }
}
