//! Retry loop: re-invoke a call on transport failures until it succeeds or
//! the retry bound is hit.

use std::fmt::Display;

use super::classify::TransportFailure;
use super::codes::ReservedCode;
use super::error::{CallError, RequestError};
use super::policy::{RetryDecision, RetryState};

/// Runs `op` until it succeeds, fails with a non-transport error, or the
/// retry bound is reached.
///
/// Transport failures become `RequestError(1000, <error text>)` once
/// retries are exhausted. Any other error is returned as
/// `CallError::Other` after a single invocation. Retries are immediate.
pub fn run_with_retry<T, E, F>(mut op: F) -> Result<T, CallError<E>>
where
    F: FnMut() -> Result<T, E>,
    E: TransportFailure + Display,
{
    let mut state = RetryState::new();
    loop {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) => {
                if e.transport_kind().is_none() {
                    return Err(CallError::Other(e));
                }
                let err = RequestError::from_reserved(ReservedCode::ConnException, e.to_string());
                match state.on_transport_failure() {
                    RetryDecision::GiveUp => return Err(err.into()),
                    RetryDecision::Retry { attempt } => {
                        tracing::error!("{} (retry {})", err, attempt);
                    }
                }
            }
        }
    }
}

/// Wraps `op` so every call through the returned closure goes through
/// [`run_with_retry`]. The argument is cloned for each attempt; pass a tuple
/// for operations taking several arguments.
pub fn retrying<A, T, E, F>(mut op: F) -> impl FnMut(A) -> Result<T, CallError<E>>
where
    A: Clone,
    F: FnMut(A) -> Result<T, E>,
    E: TransportFailure + Display,
{
    move |args: A| run_with_retry(|| op(args.clone()))
}
