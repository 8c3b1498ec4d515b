//! Top-level error wrapper types.

use crate::{ChannelError, ConfigError, FetchError};

/// Every error condition Fieldwatch can report.
///
/// # Examples
///
/// ```
/// use fieldwatch_error::{FetchError, FetchErrorKind, FieldwatchError};
///
/// let fetch = FetchError::new(FetchErrorKind::EmptyRoot);
/// let err: FieldwatchError = fetch.into();
/// assert!(format!("{}", err).contains("Server root is empty"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FieldwatchErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Status source error
    #[from(FetchError)]
    Fetch(FetchError),
    /// Publish channel error
    #[from(ChannelError)]
    Channel(ChannelError),
}

/// Fieldwatch error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fieldwatch Error: {}", _0)]
pub struct FieldwatchError(Box<FieldwatchErrorKind>);

impl FieldwatchError {
    /// Create a new error from a kind.
    pub fn new(kind: FieldwatchErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FieldwatchErrorKind {
        &self.0
    }
}

impl<T> From<T> for FieldwatchError
where
    T: Into<FieldwatchErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fieldwatch operations.
pub type FieldwatchResult<T> = std::result::Result<T, FieldwatchError>;
