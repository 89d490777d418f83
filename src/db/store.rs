//! Read interface the recommender uses to reach the membership store.

use super::DbError;
use super::memberships::ChannelData;
use async_trait::async_trait;
use std::collections::HashSet;

/// Distinct channel ids.
pub type ChannelSet = HashSet<String>;

/// Distinct user ids.
pub type UserSet = HashSet<String>;

/// What a ranked channel query counts per candidate channel.
#[derive(Debug, Clone, Copy)]
pub enum RankSignal<'a> {
    /// Posts created strictly after the cutoff (epoch milliseconds).
    PostsSince(i64),
    /// Distinct members, not counting the given user.
    MembersExcept(&'a str),
    /// Distinct members drawn from the given user set.
    MembersAmong(&'a UserSet),
}

/// A grouped, counted and capped query over open channels of one team.
#[derive(Debug, Clone, Copy)]
pub struct RankQuery<'a> {
    /// Only channels owned by this team are candidates.
    pub team_id: &'a str,
    /// Channels that must never appear in the result.
    pub exclude: &'a ChannelSet,
    /// Rank key, counted per `(name, display_name)` group.
    pub signal: RankSignal<'a>,
    /// Maximum number of rows returned.
    pub limit: usize,
}

/// Read-only access to channels, memberships and posts.
///
/// Every method observes the store as of the call; implementations must not
/// cache between calls.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Channels in `team_id` that `user_id` is a member of.
    async fn member_channel_ids(&self, user_id: &str, team_id: &str)
    -> Result<ChannelSet, DbError>;

    /// Members of a single channel.
    async fn channel_member_ids(&self, channel_id: &str) -> Result<UserSet, DbError>;

    /// Users sharing any of `channels` with `user_id`, ignoring memberships of
    /// the channel named `excluded_channel_name`. Never contains `user_id`.
    async fn co_member_ids(
        &self,
        channels: &ChannelSet,
        user_id: &str,
        excluded_channel_name: &str,
    ) -> Result<UserSet, DbError>;

    /// Open, non-deleted channels of the team ordered by the signal count,
    /// highest first. Ties come back in whatever order the store produces.
    async fn rank_channels(&self, query: &RankQuery<'_>) -> Result<Vec<ChannelData>, DbError>;
}
