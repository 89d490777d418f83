//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config and database settings
//! - [`recommend`]: Recommendation settings (default channel, activity window, deadlines)
//! - [`validation`]: Startup validation

mod recommend;
mod types;
mod validation;

pub use recommend::RecommendConfig;
pub use types::{Config, ConfigError, DatabaseConfig};
pub use validation::{ValidationError, validate};
