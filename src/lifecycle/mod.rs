//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! Ctrl-C (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → shell unmounts the health widget and returns
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
