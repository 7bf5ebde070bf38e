use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::types::CheckV2Response;
use crate::config::ClientConfig;
use crate::http::RequestExecutor;
use crate::logger::Logger;

pub const CHECK_ENDPOINT: &str = "/checkv2";
pub const SYMBOLS_ENDPOINT: &str = "/symbols";
pub const LEARN_SPAM_ENDPOINT: &str = "/learnspam";
pub const LEARN_HAM_ENDPOINT: &str = "/learnham";

/// Operations offered by an Rspamd server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Analyze: Send + Sync {
    async fn check(&self, message: &str) -> Result<CheckV2Response>;
    async fn symbols(&self, message: &str) -> Result<Value>;
    async fn learn_spam(&self, message: &str) -> Result<Value>;
    async fn learn_ham(&self, message: &str) -> Result<Value>;
}

/// Client for the Rspamd HTTP controller/worker API.
#[derive(Clone)]
pub struct RspamdClient {
    executor: RequestExecutor,
}

impl RspamdClient {
    /// Creates a client with its own connection pool for the server in `config`.
    #[tracing::instrument(skip(config))]
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("rspamd-client/", env!("RSPAMD_CLIENT_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a client that reuses an existing reqwest Client.
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            executor: RequestExecutor::new(client, config),
        }
    }

    /// Replaces the default `log`-backed logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.executor = self.executor.with_logger(logger);
        self
    }

    /// Returns the scheme, host and port every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    /// Returns the per-request timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.executor.timeout_ms()
    }

    /// Returns whether request URLs are logged.
    pub fn debug(&self) -> bool {
        self.executor.debug()
    }

    /// Sends `body` to an arbitrary endpoint and decodes the reply as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&str>,
    ) -> Result<T> {
        self.executor
            .execute(endpoint, method, body.map(str::to_owned))
            .await
    }

    async fn post<T: DeserializeOwned>(&self, endpoint: &str, message: &str) -> Result<T> {
        self.request(endpoint, Method::POST, Some(message)).await
    }
}

#[async_trait]
impl Analyze for RspamdClient {
    #[tracing::instrument(skip(self, message))]
    async fn check(&self, message: &str) -> Result<CheckV2Response> {
        self.post(CHECK_ENDPOINT, message).await
    }

    #[tracing::instrument(skip(self, message))]
    async fn symbols(&self, message: &str) -> Result<Value> {
        self.post(SYMBOLS_ENDPOINT, message).await
    }

    #[tracing::instrument(skip(self, message))]
    async fn learn_spam(&self, message: &str) -> Result<Value> {
        self.post(LEARN_SPAM_ENDPOINT, message).await
    }

    #[tracing::instrument(skip(self, message))]
    async fn learn_ham(&self, message: &str) -> Result<Value> {
        self.post(LEARN_HAM_ENDPOINT, message).await
    }
}
