//! Command layer behind the binary: read a message, run one operation,
//! render the reply.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use tokio::io::AsyncReadExt;

use crate::rspamd::{Analyze, CheckV2Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Check,
    Symbols,
    LearnSpam,
    LearnHam,
}

/// Reads the message from `path`, or from stdin when `path` is `None` or `-`.
pub async fn read_message(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading message from {:?}", path);
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read message from {:?}", path))
        }
        _ => {
            debug!("Reading message from stdin");
            let mut message = String::new();
            tokio::io::stdin()
                .read_to_string(&mut message)
                .await
                .context("Failed to read message from stdin")?;
            Ok(message)
        }
    }
}

/// Runs `operation` and returns the text to print.
#[tracing::instrument(skip(analyzer, message))]
pub async fn run<A: Analyze>(
    analyzer: &A,
    operation: Operation,
    message: &str,
    summary: bool,
) -> Result<String> {
    let value = match operation {
        Operation::Check => {
            let response = analyzer.check(message).await?;
            if summary {
                return Ok(render_summary(&response));
            }
            serde_json::to_value(&response)?
        }
        Operation::Symbols => analyzer.symbols(message).await?,
        Operation::LearnSpam => analyzer.learn_spam(message).await?,
        Operation::LearnHam => analyzer.learn_ham(message).await?,
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_summary(response: &CheckV2Response) -> String {
    let action = serde_json::to_value(response.action)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();
    let mut symbols: Vec<&str> = response.symbols.keys().map(String::as_str).collect();
    symbols.sort_unstable();

    format!(
        "Action: {}\nScore: {:.2} / {:.2}\nSymbols: {}",
        action,
        response.score,
        response.required_score,
        symbols.join(", ")
    )
}
