//! Membership repository for database queries.

use super::models::{ChannelData, ChannelRecord, ChannelType};
use crate::db::DbError;
use crate::db::store::{ChannelSet, MembershipStore, RankQuery, RankSignal, UserSet};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Repository for membership and activity reads.
pub struct MembershipRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MembershipRepository<'a> {
    /// Create a new membership repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a channel by id.
    pub async fn find_channel(&self, channel_id: &str) -> Result<Option<ChannelRecord>, DbError> {
        let row = sqlx::query_as::<_, (String, String, String, String, String, i64)>(
            r#"
            SELECT id, team_id, type, name, display_name, delete_at
            FROM channels
            WHERE id = ?
            "#,
        )
        .bind(channel_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(
            |(id, team_id, code, name, display_name, delete_at)| ChannelRecord {
                id,
                team_id,
                channel_type: ChannelType::from_code(&code),
                name,
                display_name,
                delete_at,
            },
        ))
    }
}

/// Encode an id set as a JSON array, read back in SQL with `json_each`.
///
/// A set travels as a single bound parameter, so its size is not limited by
/// SQLite's cap on host parameters.
fn id_array(ids: &std::collections::HashSet<String>) -> Result<String, DbError> {
    serde_json::to_string(ids).map_err(|e| DbError::Internal(format!("encode id set: {e}")))
}

#[async_trait]
impl MembershipStore for MembershipRepository<'_> {
    async fn member_channel_ids(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> Result<ChannelSet, DbError> {
        let rows = sqlx::query_scalar::<_, String>(
            r#"
            SELECT cm.channel_id
            FROM channel_members AS cm
            JOIN channels AS c ON c.id = cm.channel_id
            WHERE cm.user_id = ? AND c.team_id = ?
            "#,
        )
        .bind(user_id)
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }

    async fn channel_member_ids(&self, channel_id: &str) -> Result<UserSet, DbError> {
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM channel_members WHERE channel_id = ?",
        )
        .bind(channel_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }

    async fn co_member_ids(
        &self,
        channels: &ChannelSet,
        user_id: &str,
        excluded_channel_name: &str,
    ) -> Result<UserSet, DbError> {
        if channels.is_empty() {
            return Ok(UserSet::new());
        }

        let rows = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT cm.user_id
            FROM channel_members AS cm
            JOIN channels AS c ON c.id = cm.channel_id
            WHERE c.name <> ?
              AND cm.user_id <> ?
              AND cm.channel_id IN (SELECT value FROM json_each(?))
            "#,
        )
        .bind(excluded_channel_name)
        .bind(user_id)
        .bind(id_array(channels)?)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }

    async fn rank_channels(&self, query: &RankQuery<'_>) -> Result<Vec<ChannelData>, DbError> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT c.name, c.display_name FROM ");

        let count_expr = match query.signal {
            RankSignal::PostsSince(cutoff) => {
                builder
                    .push("posts AS p JOIN channels AS c ON c.id = p.channel_id WHERE p.create_at > ")
                    .push_bind(cutoff);
                "COUNT(p.id)"
            }
            RankSignal::MembersExcept(user_id) => {
                builder
                    .push(
                        "channel_members AS cm JOIN channels AS c ON c.id = cm.channel_id WHERE cm.user_id <> ",
                    )
                    .push_bind(user_id);
                "COUNT(DISTINCT cm.user_id)"
            }
            RankSignal::MembersAmong(users) => {
                // Nobody to count: no channel can qualify.
                if users.is_empty() {
                    return Ok(Vec::new());
                }
                builder
                    .push(
                        "channel_members AS cm JOIN channels AS c ON c.id = cm.channel_id WHERE cm.user_id IN (SELECT value FROM json_each(",
                    )
                    .push_bind(id_array(users)?)
                    .push("))");
                "COUNT(DISTINCT cm.user_id)"
            }
        };

        builder
            .push(" AND c.type = ")
            .push_bind(ChannelType::Open.as_str())
            .push(" AND c.team_id = ")
            .push_bind(query.team_id)
            .push(" AND c.delete_at = 0");

        if !query.exclude.is_empty() {
            builder
                .push(" AND c.id NOT IN (SELECT value FROM json_each(")
                .push_bind(id_array(query.exclude)?)
                .push("))");
        }

        builder
            .push(" GROUP BY c.name, c.display_name ORDER BY ")
            .push(count_expr)
            .push(" DESC LIMIT ")
            .push_bind(i64::try_from(query.limit).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<(String, String)>()
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(name, display_name)| ChannelData { name, display_name })
            .collect())
    }
}
