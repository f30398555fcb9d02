//! Request resilience layer.
//!
//! This module holds the error taxonomy raised across the request boundary
//! (`RequestError` and its reserved codes) and the wrapper that retries a
//! remote call on transport-level failures before classifying it.

pub mod codes;
mod classify;
mod error;
mod policy;
mod run;

pub use classify::{TransportFailure, TransportKind};
pub use codes::{is_ok_code, is_retry_code, ReservedCode, OK_CODES, RETRY_CODES};
pub use error::{CallError, RequestError, NO_BODY_MESSAGE};
pub use policy::{RetryDecision, RetryState, MAX_RETRIES};
pub use run::{retrying, run_with_retry};
