//! Channel upsert publisher.

use crate::{MessageId, ReportChannel, render_report};
use fieldwatch_core::ServerStatus;
use fieldwatch_error::FieldwatchResult;
use tracing::{debug, instrument};

/// How many recent messages are searched for the previous report.
pub const RECENT_MESSAGE_WINDOW: u8 = 10;

/// What a successful publish did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PublishAction {
    /// The previous report was edited in place.
    #[display("edited {}", _0)]
    Edited(MessageId),
    /// No previous report was found, so a new one was sent.
    #[display("created {}", _0)]
    Created(MessageId),
}

impl PublishAction {
    /// The message now holding the report.
    pub fn message_id(&self) -> MessageId {
        match self {
            Self::Edited(id) | Self::Created(id) => *id,
        }
    }
}

/// Keeps a single live report in a channel.
///
/// Each publish edits this process's most recent report among the last
/// [`RECENT_MESSAGE_WINDOW`] messages, or sends a new one if none is there.
/// Publishing identical content still performs the edit.
pub struct UpsertPublisher<C> {
    channel: C,
    auto_update_footer: String,
}

impl<C: ReportChannel> UpsertPublisher<C> {
    /// Creates a publisher; `auto_update_footer` marks automatic reports.
    pub fn new(channel: C, auto_update_footer: impl Into<String>) -> Self {
        Self {
            channel,
            auto_update_footer: auto_update_footer.into(),
        }
    }

    /// The target channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Renders `snapshot` and upserts it into the channel.
    ///
    /// Performs exactly one write on success. On error nothing was written
    /// unless the platform itself half-applied the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity lookup, listing, edit or send fails.
    #[instrument(skip(self, snapshot), fields(online = *snapshot.is_online(), players = *snapshot.players()))]
    pub async fn publish(
        &self,
        snapshot: &ServerStatus,
        is_auto_update: bool,
    ) -> FieldwatchResult<PublishAction> {
        let footer = is_auto_update.then_some(self.auto_update_footer.as_str());
        let report = render_report(snapshot, footer);

        let own = self.channel.own_identity().await?;
        let recent = self.channel.recent_messages(RECENT_MESSAGE_WINDOW).await?;
        let previous = recent
            .iter()
            .filter(|message| message.author == own && message.has_report)
            .map(|message| message.id)
            .max();

        match previous {
            Some(id) => {
                debug!(message_id = %id, "Editing previous report");
                self.channel.edit_report(id, &report).await?;
                Ok(PublishAction::Edited(id))
            }
            None => {
                debug!(scanned = recent.len(), "No previous report, sending a new one");
                let id = self.channel.send_report(&report).await?;
                Ok(PublishAction::Created(id))
            }
        }
    }
}
