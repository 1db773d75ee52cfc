//! Workbench terminal shell: a heading plus one backend health-check widget.

pub mod client;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod shell;
pub mod view;

pub use client::{ApiClient, ClientError, HttpClient};
pub use config::AppConfig;
pub use lifecycle::Shutdown;
pub use shell::Shell;
pub use view::{HealthCheck, HealthStatus};
