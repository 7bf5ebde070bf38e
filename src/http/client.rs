//! Request executor: one timed attempt per call, typed failures.

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use super::error::RspamdError;
use crate::config::ClientConfig;
use crate::logger::{LogFacade, Logger};

/// Sends a text body to `<base_url><endpoint>` and decodes the JSON reply.
///
/// The configuration is read once; the executor holds no other state, so
/// concurrent calls share nothing but the immutable base URL and timeout.
#[derive(Clone)]
pub struct RequestExecutor {
    client: Client,
    base_url: String,
    timeout_ms: u64,
    debug: bool,
    logger: Arc<dyn Logger>,
}

impl RequestExecutor {
    /// Creates an executor for the server described by `config`.
    pub fn new(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url(),
            timeout_ms: config.timeout_ms,
            debug: config.debug,
            logger: Arc::new(LogFacade),
        }
    }

    /// Replaces the default `log`-backed logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Returns the scheme, host and port every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns whether request URLs are logged.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Performs a single request.
    ///
    /// Fails with [`RspamdError::Status`] on a non-2xx reply and with
    /// [`RspamdError::Timeout`] when no response arrives in time. Other
    /// transport errors (`reqwest::Error`) and JSON decode errors
    /// (`serde_json::Error`) are returned as-is.
    #[tracing::instrument(skip(self, body))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        if self.debug {
            self.logger.debug(&format!("Making request to {}", url));
        }

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "text/plain");
        if let Some(body) = body {
            request = request.body(body);
        }

        // The timer lives inside this future and is dropped as soon as
        // headers arrive, the transport fails, or it fires.
        let response =
            match tokio::time::timeout(Duration::from_millis(self.timeout_ms), request.send())
                .await
            {
                Ok(sent) => sent?,
                Err(_elapsed) => return Err(RspamdError::Timeout(self.timeout_ms).into()),
            };

        let status = response.status();
        if !status.is_success() {
            return Err(RspamdError::Status(status.as_u16()).into());
        }

        let bytes = response.bytes().await?;
        let result = serde_json::from_slice::<T>(&bytes)?;

        Ok(result)
    }
}
