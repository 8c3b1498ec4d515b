//! Chat platform boundary.

use async_trait::async_trait;
use fieldwatch_core::StatusReport;
use fieldwatch_error::ChannelError;

/// Result type for channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Platform message identifier. Newer messages have larger ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
#[display("{}", _0)]
pub struct MessageId(pub u64);

/// Platform user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
#[display("{}", _0)]
pub struct AuthorId(pub u64);

/// What the publisher needs to know about a channel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    /// Message id
    pub id: MessageId,
    /// Who wrote it
    pub author: AuthorId,
    /// Whether it carries a structured report rather than plain text
    pub has_report: bool,
}

/// Capabilities the engine needs from the target channel.
#[async_trait]
pub trait ReportChannel: Send + Sync {
    /// Lists up to `limit` of the most recent messages.
    async fn recent_messages(&self, limit: u8) -> ChannelResult<Vec<ChannelMessage>>;

    /// Sends a new report message.
    async fn send_report(&self, report: &StatusReport) -> ChannelResult<MessageId>;

    /// Replaces the report carried by an existing message.
    async fn edit_report(&self, id: MessageId, report: &StatusReport) -> ChannelResult<()>;

    /// The identity this process posts as.
    async fn own_identity(&self) -> ChannelResult<AuthorId>;
}
