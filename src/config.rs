//! Client configuration and its defaults.

use serde::Deserialize;

use crate::rspamd::Action;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 11333;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Connection settings for a single Rspamd endpoint.
///
/// All fields are fixed once the client is built; the derived base address
/// is computed by [`ClientConfig::base_url`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Use `https` instead of `http`.
    pub https: bool,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Log every outgoing request URL at debug level.
    pub debug: bool,
    /// Not used by the client itself; carried for callers that interpret results.
    pub spam_detection: SpamDetectionConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            https: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            debug: false,
            spam_detection: SpamDetectionConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn base_url(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}

/// Which verdicts count as spam, for callers that classify results.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpamDetectionConfig {
    pub spam_actions: Vec<Action>,
    pub score_threshold: f64,
}

impl Default for SpamDetectionConfig {
    fn default() -> Self {
        Self {
            spam_actions: vec![Action::Reject, Action::AddHeader, Action::RewriteSubject],
            score_threshold: 7.0,
        }
    }
}
