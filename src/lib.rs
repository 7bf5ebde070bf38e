//! Client for the Rspamd spam-filtering HTTP API.
//!
//! ```no_run
//! use rspamd_client::{Analyze, ClientConfig, RspamdClient};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = RspamdClient::new(&ClientConfig::default())?;
//! let verdict = client.check("Subject: hello\r\n\r\nworld").await?;
//! println!("{:?} ({})", verdict.action, verdict.score);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod logger;
pub mod rspamd;

pub use config::{ClientConfig, SpamDetectionConfig};
pub use http::{RspamdError, is_rspamd_error, is_timeout};
pub use rspamd::{Action, Analyze, CheckV2Response, RspamdClient};
