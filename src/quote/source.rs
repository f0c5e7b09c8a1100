use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::types::Quote;

/// Errors that can end a single fetch attempt.
///
/// The retry loop treats every variant the same way; the distinction only
/// matters for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The request could not complete (DNS, connection refused, reset).
    Network(String),
    /// The attempt exceeded its deadline and the request was dropped.
    Timeout(Duration),
    /// The endpoint answered with a non-success status.
    Http { status: u16, message: String },
    /// The body was not JSON, or lacked a usable text/author pair.
    Malformed(String),
}

impl QuoteError {
    /// Short label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::Network(_) => "network",
            QuoteError::Timeout(_) => "timeout",
            QuoteError::Http { .. } => "http",
            QuoteError::Malformed(_) => "malformed",
        }
    }
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::Network(msg) => write!(f, "network error: {msg}"),
            QuoteError::Timeout(after) => {
                write!(f, "request aborted after {}ms", after.as_millis())
            }
            QuoteError::Http { status, message } => {
                write!(f, "HTTP error (status {status}): {message}")
            }
            QuoteError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for QuoteError {}

/// Anything that can produce a single quote per call.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Performs one request. Timeouts are applied by the caller.
    async fn fetch_quote(&self) -> Result<Quote, QuoteError>;
}
