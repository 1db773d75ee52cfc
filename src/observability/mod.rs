//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`, written to stderr
//! - Frames own stdout, so logs never interleave with rendered output

pub mod logging;
