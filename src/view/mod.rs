//! Health-status view.
//!
//! # State Machine
//! ```text
//! Pending ──(request ok)──▶ Healthy   (terminal)
//!    │
//!    └────(request err)───▶ Unhealthy (terminal)
//! ```
//!
//! # Design Decisions
//! - Exactly one request per mount, issued by `HealthCheck::mount`
//! - Rendering is a pure read of the current status
//! - Results arriving after unmount are dropped through `Lifetime`

pub mod health_check;
pub mod lifetime;
pub mod status;

pub use health_check::{HealthCheck, HEALTH_PATH};
pub use lifetime::{Lifetime, LifetimeToken};
pub use status::{HealthStatus, FALLBACK_ERROR};
