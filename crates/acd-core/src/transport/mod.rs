//! Blocking HTTP GET over libcurl, wrapped by the retry layer.
//!
//! Only issues the request and hands back the raw status and body; status
//! interpretation is left to callers through [`Response::ensure_ok`].

mod response;

pub use response::Response;

use std::time::Duration;

use crate::config::AcdConfig;
use crate::request::{run_with_retry, CallError, TransportFailure, TransportKind};

/// Failure of a single GET before a response was received.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
}

impl TransportFailure for HttpError {
    fn transport_kind(&self) -> Option<TransportKind> {
        match self {
            HttpError::Curl(e) => e.transport_kind(),
        }
    }
}

fn read_window(read_timeout: Duration) -> Duration {
    Duration::from_secs(read_timeout.as_secs().max(1))
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    connect_timeout: Duration,
    read_timeout: Duration,
    user_agent: Option<String>,
}

impl HttpClient {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            read_timeout,
            user_agent: None,
        }
    }

    pub fn from_config(cfg: &AcdConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            read_timeout: Duration::from_secs(cfg.read_timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    /// One GET round trip. Runs in the current thread.
    pub fn get(&self, url: &str) -> Result<Response, HttpError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        // Read window: abort once no byte has arrived for `read_timeout`.
        // curl counts this in whole seconds; there is no cap on total time.
        easy.low_speed_limit(1)?;
        easy.low_speed_time(read_window(self.read_timeout))?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(Response::new(status, body))
    }

    /// [`HttpClient::get`] with connection failures and read timeouts retried.
    pub fn get_with_retry(&self, url: &str) -> Result<Response, CallError<HttpError>> {
        run_with_retry(|| self.get(url))
    }
}
