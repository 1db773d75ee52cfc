//! Application shell.
//!
//! # Data Flow
//! ```text
//! Shell::run
//!     → mount HealthCheck (one request)
//!     → write pending frame
//!     → wait: terminal status | shutdown signal
//!     → write final frame | unmount
//! ```

pub mod app;

pub use app::{exit_code, Shell, ShellError};
