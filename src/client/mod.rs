//! Outbound HTTP client adapter.
//!
//! # Data Flow
//! ```text
//! view
//!     → ApiClient::get(path)
//!     → HttpClient (base URL + path, timeout, status check)
//!     → ResponsePayload (decoded JSON)
//!     → ResponsePayload::decode::<T>() (typed body)
//! ```
//!
//! # Design Decisions
//! - The adapter is a trait so views take it by injection
//! - Every failure mode lands in one `ClientError` channel
//! - No retries, no caching

pub mod error;
pub mod http;
pub mod types;

use async_trait::async_trait;

pub use error::ClientError;
pub use http::HttpClient;
pub use types::{HealthReport, ResponsePayload};

/// A stateless GET-only client bound to a base URL.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch a server-relative `path` and return its decoded body.
    async fn get(&self, path: &str) -> Result<ResponsePayload, ClientError>;
}
