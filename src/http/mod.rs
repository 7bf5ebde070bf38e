//! HTTP request execution with timeout and error classification.

mod client;
mod error;

pub use client::RequestExecutor;
pub use error::{RspamdError, is_rspamd_error, is_timeout};
