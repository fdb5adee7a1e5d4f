//! Price oracle error types.

/// Errors from pricing one carton.
///
/// Any of these aborts the whole quote: a partial total is meaningless
/// once one carton cannot be priced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    /// The calculator is down, timed out, or reported error code 7.
    /// Retrying the whole quote later may succeed.
    #[error("price calculator temporarily unavailable: {reason}")]
    TemporarilyUnavailable { reason: String },

    /// The reply could not be understood (bad XML, missing fields,
    /// unexpected HTTP status). Indicates an upstream contract change.
    #[error("invalid response from price calculator: {reason}")]
    InvalidResponse { reason: String },

    /// The carrier refused to price the carton (unsupported route,
    /// out-of-range dimensions, ...). `message` is the carrier's text
    /// verbatim when it sent one.
    #[error("carrier rejected price request (code {code}): {message}")]
    Rejected { code: String, message: String },
}

impl PriceError {
    /// Whether retrying the quote later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TemporarilyUnavailable { .. })
    }
}

/// Client configuration and construction errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid value for {0}: {1:?}")]
    InvalidNumber(String, String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
