//! Classify errors into the transport-failure set the retry wrapper intercepts.

use std::io;

/// The only failure kinds `run_with_retry` retries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connection could not be established or was dropped (refused, reset,
    /// DNS, TLS handshake).
    Connection,
    /// No response within the transport's read timeout.
    ReadTimeout,
}

/// Implemented by error types a wrapped call can return.
///
/// Returning `Some` marks the error as a transport failure and makes it
/// eligible for retry; `None` means the error is passed back untouched.
pub trait TransportFailure {
    fn transport_kind(&self) -> Option<TransportKind>;
}

impl TransportFailure for curl::Error {
    fn transport_kind(&self) -> Option<TransportKind> {
        if self.is_operation_timedout() {
            return Some(TransportKind::ReadTimeout);
        }
        if self.is_couldnt_connect()
            || self.is_couldnt_resolve_host()
            || self.is_couldnt_resolve_proxy()
            || self.is_recv_error()
            || self.is_send_error()
            || self.is_got_nothing()
            || self.is_ssl_connect_error()
            || self.is_peer_failed_verification()
        {
            return Some(TransportKind::Connection);
        }
        None
    }
}

impl TransportFailure for io::Error {
    fn transport_kind(&self) -> Option<TransportKind> {
        match self.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::BrokenPipe => Some(TransportKind::Connection),
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Some(TransportKind::ReadTimeout),
            _ => None,
        }
    }
}
