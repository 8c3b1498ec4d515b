//! Status fetch error types.
//!
//! A fetch error never escapes the fetcher as a failure: it travels alongside
//! the offline snapshot so callers can log why the source looked offline.

/// Reasons a status fetch produced no usable document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchErrorKind {
    /// The request did not complete within the fetch timeout.
    #[display("Request timed out after {}s", _0)]
    Timeout(u64),

    /// Connection, TLS or body read failure.
    #[display("Transport failure: {}", _0)]
    Transport(String),

    /// The server answered with a non-success status code.
    #[display("Unexpected HTTP status {}", _0)]
    HttpStatus(u16),

    /// The body is not well-formed XML.
    #[display("Malformed document: {}", _0)]
    Xml(String),

    /// The document root is not a `Server` element.
    #[display("Missing Server root (found <{}>)", _0)]
    MissingRoot(String),

    /// The `Server` root carries neither attributes nor child elements.
    #[display("Server root is empty")]
    EmptyRoot,
}

impl FetchErrorKind {
    /// True for failures that happened before a document was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Transport(_) | Self::HttpStatus(_)
        )
    }
}

/// Status fetch error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// Error kind
    pub kind: FetchErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl FetchError {
    /// Create a new FetchError at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldwatch_error::{FetchError, FetchErrorKind};
    ///
    /// let err = FetchError::new(FetchErrorKind::HttpStatus(503));
    /// assert!(err.kind.is_transport());
    /// ```
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
