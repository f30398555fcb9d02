/// Retry counter value at which the next transport failure is terminal.
///
/// The counter is checked before it is incremented, so an operation that
/// always fails is invoked `MAX_RETRIES + 1` times in total.
pub const MAX_RETRIES: u32 = 5;

/// Decision taken after a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Stop and surface the classified error.
    GiveUp,
    /// Invoke again immediately; `attempt` is the 1-based retry ordinal.
    Retry { attempt: u32 },
}

/// Per-invocation retry counter. Never shared between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryState {
    attempt: u32,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retries performed so far.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Record a transport failure. No backoff: a retry happens right away.
    pub fn on_transport_failure(&mut self) -> RetryDecision {
        if self.attempt >= MAX_RETRIES {
            return RetryDecision::GiveUp;
        }
        self.attempt += 1;
        RetryDecision::Retry {
            attempt: self.attempt,
        }
    }
}
