//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (WORKBENCH_API_URL)
//!     → CLI overrides (ConfigOverrides)
//!     → validation.rs (semantic checks, once, after all overrides)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a missing file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    apply_env_overrides, parse_config, read_config, resolve_config, ConfigError, ConfigOverrides,
    API_URL_ENV,
};
pub use schema::{ApiConfig, AppConfig, LogFormat, ObservabilityConfig, ShellConfig};
pub use validation::{validate_config, ValidationError};
