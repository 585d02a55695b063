// Error types for YouTube Data API calls

use std::fmt;

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Upstream answered with a non-success status code
    Status(u16),

    /// Transport-level failure (DNS, connect, timeout)
    Network(String),

    /// Response body did not match the expected shape
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "YouTube API returned HTTP {}", code),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Network(e.to_string())
        }
    }
}
