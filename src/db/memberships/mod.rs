//! Membership repository backing channel discovery.
//!
//! Answers the set lookups and ranked aggregations the recommender needs.

pub mod models;
pub mod queries;

pub use models::{ChannelData, ChannelRecord, ChannelType};
pub use queries::MembershipRepository;
