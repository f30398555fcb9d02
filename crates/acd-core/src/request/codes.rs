//! Status code sets and reserved internal codes.
//!
//! Reserved codes start at 1000 so they never collide with HTTP statuses.

use serde::Serialize;

/// Local transport-level failure (connection refused/reset, read timeout).
pub const CONN_EXCEPTION: u32 = 1000;
/// A dependent sub-request failed.
pub const FAILED_SUBREQUEST: u32 = 1002;
/// A multi-part or paginated result did not complete.
pub const INCOMPLETE_RESULT: u32 = 1003;
/// Credential refresh failed.
pub const REFRESH_FAILED: u32 = 1004;
/// Credential rejected by the service.
pub const INVALID_TOKEN: u32 = 1005;

/// Statuses that mean the request functionally succeeded.
pub const OK_CODES: [u32; 1] = [200];

/// Server statuses worth retrying (500, 504).
///
/// Informational for callers: `run_with_retry` only retries transport
/// failures and never looks at a completed response's status.
pub const RETRY_CODES: [u32; 2] = [500, 504];

pub fn is_ok_code(code: u32) -> bool {
    OK_CODES.contains(&code)
}

pub fn is_retry_code(code: u32) -> bool {
    RETRY_CODES.contains(&code)
}

/// The reserved (non-HTTP) classification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservedCode {
    ConnException,
    FailedSubrequest,
    IncompleteResult,
    RefreshFailed,
    InvalidToken,
}

impl ReservedCode {
    pub const ALL: [ReservedCode; 5] = [
        ReservedCode::ConnException,
        ReservedCode::FailedSubrequest,
        ReservedCode::IncompleteResult,
        ReservedCode::RefreshFailed,
        ReservedCode::InvalidToken,
    ];

    pub fn code(self) -> u32 {
        match self {
            ReservedCode::ConnException => CONN_EXCEPTION,
            ReservedCode::FailedSubrequest => FAILED_SUBREQUEST,
            ReservedCode::IncompleteResult => INCOMPLETE_RESULT,
            ReservedCode::RefreshFailed => REFRESH_FAILED,
            ReservedCode::InvalidToken => INVALID_TOKEN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReservedCode::ConnException => "CONN_EXCEPTION",
            ReservedCode::FailedSubrequest => "FAILED_SUBREQUEST",
            ReservedCode::IncompleteResult => "INCOMPLETE_RESULT",
            ReservedCode::RefreshFailed => "REFRESH_FAILED",
            ReservedCode::InvalidToken => "INVALID_TOKEN",
        }
    }

    /// Look up a reserved code; `None` for HTTP statuses and unknown values
    /// (including the unassigned 1001).
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

impl From<ReservedCode> for u32 {
    fn from(r: ReservedCode) -> u32 {
        r.code()
    }
}
