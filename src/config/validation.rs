//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use std::path::Path;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("recommend.default_channel must not be empty")]
    EmptyDefaultChannel,
    #[error("recommend.activity_threshold_minutes must be greater than zero")]
    ZeroActivityThreshold,
    #[error("recommend.query_timeout_secs must be greater than zero")]
    ZeroQueryTimeout,
    #[error("database.max_connections must be greater than zero")]
    ZeroMaxConnections,
    #[error("database.acquire_timeout_secs must be greater than zero")]
    ZeroAcquireTimeout,
    #[error("database.path parent directory does not exist: {0}")]
    DatabasePathInvalid(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let recommend = &config.recommend;
    if recommend.default_channel.trim().is_empty() {
        errors.push(ValidationError::EmptyDefaultChannel);
    }
    if recommend.activity_threshold_minutes == 0 {
        errors.push(ValidationError::ZeroActivityThreshold);
    }
    if recommend.query_timeout_secs == 0 {
        errors.push(ValidationError::ZeroQueryTimeout);
    }

    let db = &config.database;
    if db.max_connections == 0 {
        errors.push(ValidationError::ZeroMaxConnections);
    }
    if db.acquire_timeout_secs == 0 {
        errors.push(ValidationError::ZeroAcquireTimeout);
    }
    if db.path != ":memory:" {
        let db_path = Path::new(&db.path);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ValidationError::DatabasePathInvalid(db.path.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
