//! Frame composition and the shell run loop.

use std::io::Write;
use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};

use crate::client::ApiClient;
use crate::config::ShellConfig;
use crate::view::{HealthCheck, HealthStatus};

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// Static headings plus one health-check widget.
pub struct Shell {
    config: ShellConfig,
    client: Arc<dyn ApiClient>,
}

impl Shell {
    pub fn new(config: ShellConfig, client: Arc<dyn ApiClient>) -> Self {
        Self { config, client }
    }

    /// Full text of the shell for a given widget status.
    pub fn frame(&self, status: &HealthStatus) -> String {
        format!(
            "{}\n{}\n\n{}\n",
            self.config.title,
            self.config.subtitle,
            status.render()
        )
    }

    /// Render until the widget settles or `shutdown` fires.
    ///
    /// Returns the last rendered status; `Pending` means the run was interrupted.
    pub async fn run<W: Write>(
        &self,
        out: &mut W,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<HealthStatus, ShellError> {
        let view = HealthCheck::mount(Arc::clone(&self.client));
        // The request may already have finished on another worker.
        self.write_frame(out, &HealthStatus::Pending)?;

        let settled = tokio::select! {
            status = view.settled() => Some(status),
            _ = shutdown_requested(&mut shutdown) => None,
        };

        match settled {
            Some(status) => {
                self.write_frame(out, &status)?;
                Ok(status)
            }
            None => {
                tracing::info!("Shutdown requested before health check finished");
                view.unmount();
                Ok(HealthStatus::Pending)
            }
        }
    }

    fn write_frame<W: Write>(&self, out: &mut W, status: &HealthStatus) -> Result<(), ShellError> {
        out.write_all(self.frame(status).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Resolves on a shutdown signal. A closed channel never signals.
async fn shutdown_requested(rx: &mut broadcast::Receiver<()>) {
    match rx.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        Err(RecvError::Closed) => std::future::pending().await,
    }
}

/// Process exit code for a finished run.
///
/// Only `Unhealthy` fails, and only when `fail_on_unhealthy` is set.
pub fn exit_code(status: &HealthStatus, fail_on_unhealthy: bool) -> u8 {
    match status {
        HealthStatus::Unhealthy { .. } if fail_on_unhealthy => 1,
        _ => 0,
    }
}
