//! Recommendation configuration.

use serde::Deserialize;
use std::time::Duration;

/// Recommendation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    /// Name of the team-wide channel every user joins (default: "town-square").
    /// Its memberships say nothing about shared interests, so they are
    /// ignored when looking for co-members.
    #[serde(default = "default_channel")]
    pub default_channel: String,
    /// Activity window used when the caller does not pick one (default: one week).
    #[serde(default = "default_activity_threshold_minutes")]
    pub activity_threshold_minutes: u32,
    /// Deadline for each individual store read (default: 10).
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

impl RecommendConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_channel: default_channel(),
            activity_threshold_minutes: default_activity_threshold_minutes(),
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}

fn default_channel() -> String {
    "town-square".to_string()
}

fn default_activity_threshold_minutes() -> u32 {
    7 * 24 * 60
}

fn default_query_timeout_secs() -> u64 {
    10
}
