//! Client error taxonomy.

use std::time::Duration;

/// Every way a request can fail.
///
/// Callers that only care about a human-readable reason use
/// [`ClientError::description`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid request URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("request failed with status {status}{}", reason_suffix(.reason))]
    Status { status: u16, reason: Option<String> },

    #[error("invalid response payload: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),

    #[error("unspecified failure")]
    Unspecified,
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" {r}"))
        .unwrap_or_default()
}

impl ClientError {
    /// Human-readable reason, or `None` when the failure carries none.
    pub fn description(&self) -> Option<String> {
        match self {
            ClientError::Unspecified => None,
            ClientError::Other(msg) if msg.trim().is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
