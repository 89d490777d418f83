//! Channel recommendations.
//!
//! Four fixed heuristics, each answering "which channels should this user
//! look at next?" from a different angle:
//! - [`Recommender::most_active_channels`]: most posts in a recent window
//! - [`Recommender::most_populated_channels`]: most members
//! - [`Recommender::most_popular_channels_by_channel`]: favourites of the
//!   people in a given channel
//! - [`Recommender::most_popular_channels_by_user_co_members`]: favourites of
//!   the people who already share channels with the user
//!
//! Every heuristic only returns open, non-deleted channels of the requested
//! team that the user is not already a member of, at most [`RESULT_LIMIT`] of
//! them, highest rank first. Channels with equal rank come back in store
//! order, which is not stable between calls.
//!
//! The recommender keeps no state between calls. Each call re-reads the
//! store, and the first failed read aborts the call.

use crate::config::RecommendConfig;
use crate::db::{
    ChannelData, ChannelSet, DbError, MembershipStore, RankQuery, RankSignal, UserSet,
};
use crate::error::RecommendResult;
use crate::telemetry::spans;
use std::future::Future;
use std::time::Duration;
use tracing::{Instrument, debug};

/// Maximum number of channels any heuristic returns.
pub const RESULT_LIMIT: usize = 3;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Oldest post timestamp (exclusive) that still counts as recent activity.
pub fn activity_cutoff(now_ms: i64, activity_threshold_minutes: u32) -> i64 {
    now_ms.saturating_sub(i64::from(activity_threshold_minutes) * MILLIS_PER_MINUTE)
}

/// Recommendation engine over a membership store.
pub struct Recommender<S> {
    store: S,
    default_channel: String,
    query_timeout: Duration,
}

impl<S: MembershipStore> Recommender<S> {
    pub fn new(store: S, config: &RecommendConfig) -> Self {
        Self {
            store,
            default_channel: config.default_channel.clone(),
            query_timeout: config.query_timeout(),
        }
    }

    /// Run one store read under the per-read deadline.
    async fn read<T>(&self, read: impl Future<Output = Result<T, DbError>>) -> RecommendResult<T> {
        match tokio::time::timeout(self.query_timeout, read).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(DbError::Timeout(self.query_timeout).into()),
        }
    }

    /// Channels of `team_id` the user belongs to.
    pub async fn my_channels(&self, user_id: &str, team_id: &str) -> RecommendResult<ChannelSet> {
        self.read(self.store.member_channel_ids(user_id, team_id))
            .await
    }

    /// Users sharing at least one of `my_channels` with the user, not counting
    /// the default channel. The user is never part of the result.
    pub async fn co_members(
        &self,
        my_channels: &ChannelSet,
        user_id: &str,
    ) -> RecommendResult<UserSet> {
        let mut co_members = self
            .read(
                self.store
                    .co_member_ids(my_channels, user_id, &self.default_channel),
            )
            .await?;
        co_members.remove(user_id);
        Ok(co_members)
    }

    /// Members of one channel.
    pub async fn channel_members(&self, channel_id: &str) -> RecommendResult<UserSet> {
        self.read(self.store.channel_member_ids(channel_id)).await
    }

    async fn rank(
        &self,
        team_id: &str,
        exclude: &ChannelSet,
        signal: RankSignal<'_>,
    ) -> RecommendResult<Vec<ChannelData>> {
        let query = RankQuery {
            team_id,
            exclude,
            signal,
            limit: RESULT_LIMIT,
        };
        let mut channels = self.read(self.store.rank_channels(&query)).await?;
        channels.truncate(RESULT_LIMIT);
        Ok(channels)
    }

    /// Channels with the most posts created within the last
    /// `activity_threshold_minutes` before `now_ms`.
    pub async fn most_active_channels(
        &self,
        user_id: &str,
        team_id: &str,
        activity_threshold_minutes: u32,
        now_ms: i64,
    ) -> RecommendResult<Vec<ChannelData>> {
        async {
            let my_channels = self.my_channels(user_id, team_id).await?;
            let cutoff = activity_cutoff(now_ms, activity_threshold_minutes);

            let channels = self
                .rank(team_id, &my_channels, RankSignal::PostsSince(cutoff))
                .await?;
            debug!(cutoff, results = channels.len(), "Ranked channels by activity");
            Ok(channels)
        }
        .instrument(spans::recommendation("most_active", user_id, team_id))
        .await
    }

    /// Channels with the most members.
    pub async fn most_populated_channels(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> RecommendResult<Vec<ChannelData>> {
        async {
            let my_channels = self.my_channels(user_id, team_id).await?;

            let channels = self
                .rank(team_id, &my_channels, RankSignal::MembersExcept(user_id))
                .await?;
            debug!(results = channels.len(), "Ranked channels by population");
            Ok(channels)
        }
        .instrument(spans::recommendation("most_populated", user_id, team_id))
        .await
    }

    /// Channels most shared by the members of `channel_id`.
    ///
    /// The anchor channel's member set is used as stored, so it includes the
    /// requesting user when they belong to it. The user's own channels are
    /// excluded from the result anyway.
    pub async fn most_popular_channels_by_channel(
        &self,
        user_id: &str,
        channel_id: &str,
        team_id: &str,
    ) -> RecommendResult<Vec<ChannelData>> {
        async {
            let other_members = self.channel_members(channel_id).await?;
            if other_members.is_empty() {
                debug!("Anchor channel has no members");
                return Ok(Vec::new());
            }

            let my_channels = self.my_channels(user_id, team_id).await?;

            let channels = self
                .rank(
                    team_id,
                    &my_channels,
                    RankSignal::MembersAmong(&other_members),
                )
                .await?;
            debug!(
                anchor = %channel_id,
                members = other_members.len(),
                results = channels.len(),
                "Ranked channels by anchor channel members"
            );
            Ok(channels)
        }
        .instrument(spans::recommendation("by_channel", user_id, team_id))
        .await
    }

    /// Channels most shared by the user's co-members.
    pub async fn most_popular_channels_by_user_co_members(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> RecommendResult<Vec<ChannelData>> {
        async {
            let my_channels = self.my_channels(user_id, team_id).await?;
            let co_members = self.co_members(&my_channels, user_id).await?;

            if co_members.is_empty() {
                debug!("No co-members outside the default channel");
                return Ok(Vec::new());
            }

            let channels = self
                .rank(team_id, &my_channels, RankSignal::MembersAmong(&co_members))
                .await?;
            debug!(
                co_members = co_members.len(),
                results = channels.len(),
                "Ranked channels by co-members"
            );
            Ok(channels)
        }
        .instrument(spans::recommendation("by_co_members", user_id, team_id))
        .await
    }
}
