//! chandisco - channel discovery recommendations.
//!
//! Suggests channels a user might want to join next, using post activity
//! and membership overlap read from a SQLite membership store.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use chandisco::{Config, Database, Recommender};
//!
//! let config = Config::default();
//! let db = Database::connect(&config.database).await?;
//! let recommender = Recommender::new(db.memberships(), &config.recommend);
//! let channels = recommender.most_populated_channels("user-id", "team-id").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod recommend;
pub mod telemetry;

pub use config::Config;
pub use db::{ChannelData, Database, MembershipStore};
pub use error::{RecommendError, RecommendResult};
pub use recommend::{RESULT_LIMIT, Recommender};
