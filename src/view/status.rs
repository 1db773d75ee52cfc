//! View status and its text rendering.

use crate::client::{ClientError, HealthReport};

/// Shown when a failure carries no description of its own.
pub const FALLBACK_ERROR: &str = "Failed to connect to backend";

const PENDING_TEXT: &str = "Checking backend connection...";

/// Status of one mounted health check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Pending,
    Healthy {
        message: String,
    },
    Unhealthy {
        error: String,
    },
}

impl HealthStatus {
    /// Terminal status for a finished request.
    pub fn from_outcome(outcome: Result<HealthReport, ClientError>) -> Self {
        match outcome {
            Ok(report) => {
                if !report.is_ok() {
                    tracing::warn!(status = %report.status, "Backend reported non-ok status");
                }
                HealthStatus::Healthy {
                    message: report.message,
                }
            }
            Err(err) => HealthStatus::Unhealthy {
                error: err
                    .description()
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, HealthStatus::Pending)
    }

    pub fn render(&self) -> String {
        match self {
            HealthStatus::Pending => PENDING_TEXT.to_string(),
            HealthStatus::Healthy { message } => format!("✓ {message}"),
            HealthStatus::Unhealthy { error } => format!("Error: {error}"),
        }
    }
}
