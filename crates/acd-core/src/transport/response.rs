//! Raw HTTP response and status checks against the OK code set.

use crate::request::{is_ok_code, is_retry_code, RequestError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u32, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_ok(&self) -> bool {
        is_ok_code(self.status)
    }

    pub fn is_retry_code(&self) -> bool {
        is_retry_code(self.status)
    }

    /// Pass an OK response through, otherwise classify it as
    /// `RequestError(status, body)`.
    pub fn ensure_ok(self) -> Result<Response, RequestError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(RequestError::new(self.status, self.text()))
        }
    }
}
