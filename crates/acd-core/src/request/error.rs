//! Classified request error raised across the retry boundary.

use super::codes::ReservedCode;

/// Message used when the failure carried no text of its own.
pub const NO_BODY_MESSAGE: &str = "[api] no body received.";

/// A request failure with a numeric classification.
///
/// `code` is either an HTTP status or one of the reserved codes in
/// [`super::codes`]. Both fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("RequestError: {code}, {message}")]
pub struct RequestError {
    code: u32,
    message: String,
}

impl RequestError {
    /// Build an error; an empty message is replaced by [`NO_BODY_MESSAGE`].
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            NO_BODY_MESSAGE.to_string()
        } else {
            message
        };
        Self { code, message }
    }

    pub fn from_reserved(code: ReservedCode, message: impl Into<String>) -> Self {
        Self::new(code.code(), message)
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The reserved code this error carries, if it is not an HTTP status.
    pub fn reserved(&self) -> Option<ReservedCode> {
        ReservedCode::from_code(self.code)
    }

    /// True when retries were exhausted on transport failures.
    pub fn is_conn_exception(&self) -> bool {
        self.reserved() == Some(ReservedCode::ConnException)
    }
}

/// Outcome of a failed call made through the retry wrapper.
///
/// `Request` is the classified error after retries ran out; `Other` is the
/// wrapped operation's own error, returned untouched.
#[derive(Debug, thiserror::Error)]
pub enum CallError<E> {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Other(E),
}

impl<E> CallError<E> {
    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            CallError::Request(e) => Some(e),
            CallError::Other(_) => None,
        }
    }

    pub fn into_other(self) -> Option<E> {
        match self {
            CallError::Other(e) => Some(e),
            CallError::Request(_) => None,
        }
    }
}
