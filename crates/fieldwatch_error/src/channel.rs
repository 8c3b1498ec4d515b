//! Chat channel error types.

/// Failures talking to the publish channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChannelErrorKind {
    /// Listing recent channel messages failed.
    #[display("Failed to list channel messages: {}", _0)]
    ListFailed(String),

    /// Sending a new report message failed.
    #[display("Failed to send report: {}", _0)]
    SendFailed(String),

    /// Editing an existing report message failed.
    #[display("Failed to edit report {}: {}", message_id, reason)]
    EditFailed {
        /// Message that could not be edited
        message_id: u64,
        /// Platform error text
        reason: String,
    },

    /// The bot's own identity could not be resolved.
    #[display("Own identity unavailable: {}", _0)]
    IdentityUnavailable(String),
}

/// Channel error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Channel Error: {} at line {} in {}", kind, line, file)]
pub struct ChannelError {
    /// Error kind
    pub kind: ChannelErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ChannelError {
    /// Create a new ChannelError at the caller's location.
    #[track_caller]
    pub fn new(kind: ChannelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
