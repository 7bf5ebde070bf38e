//! Rspamd API operations and response types.

mod client;
mod types;

#[cfg(test)]
pub use client::MockAnalyze;
pub use client::{
    Analyze, CHECK_ENDPOINT, LEARN_HAM_ENDPOINT, LEARN_SPAM_ENDPOINT, RspamdClient,
    SYMBOLS_ENDPOINT,
};
pub use types::{Action, CheckV2Response, MilterAddHeader, MilterHeaders, Symbol, Thresholds};
