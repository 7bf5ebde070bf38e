//! Typed failures produced by the request executor.
//!
//! Both variants are transport failures; [`RspamdError::is_timeout`] picks out
//! the timeout case. Errors from the transport that are not caused by our own
//! timer, and JSON decode errors, are passed through unwrapped.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RspamdError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// No response arrived within the configured timeout (milliseconds).
    #[error("Request timed out after {0}ms")]
    Timeout(u64),
}

impl RspamdError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RspamdError::Timeout(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RspamdError::Status(code) => Some(*code),
            RspamdError::Timeout(_) => None,
        }
    }
}

/// True when `error` is any [`RspamdError`], timeout included.
pub fn is_rspamd_error(error: &anyhow::Error) -> bool {
    error.downcast_ref::<RspamdError>().is_some()
}

/// True when `error` is a [`RspamdError::Timeout`].
pub fn is_timeout(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<RspamdError>()
        .is_some_and(RspamdError::is_timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = RspamdError::Status(400);
        assert_eq!(err.to_string(), "HTTP error! status: 400");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_timeout_display() {
        let err = RspamdError::Timeout(100);
        assert_eq!(err.to_string(), "Request timed out after 100ms");
        assert_eq!(err.status(), None);
        assert!(err.is_timeout());
    }

    #[test]
    fn test_timeout_is_also_rspamd_error() {
        let err = anyhow::Error::from(RspamdError::Timeout(5000));
        assert!(is_rspamd_error(&err));
        assert!(is_timeout(&err));
    }

    #[test]
    fn test_status_is_not_timeout() {
        let err = anyhow::Error::from(RspamdError::Status(503));
        assert!(is_rspamd_error(&err));
        assert!(!is_timeout(&err));
    }

    #[test]
    fn test_foreign_error_is_unclassified() {
        let err = anyhow::anyhow!("connection reset by peer");
        assert!(!is_rspamd_error(&err));
        assert!(!is_timeout(&err));
    }
}
