//! Shared fixtures for integration tests.
//!
//! Seeds an in-memory membership store the way a host application would.

#![allow(dead_code)]

use chandisco::Database;
use chandisco::config::RecommendConfig;

pub const TEAM: &str = "team-1";
pub const OTHER_TEAM: &str = "team-2";
pub const NOW_MS: i64 = 1_700_000_000_000;
pub const MINUTE_MS: i64 = 60_000;

/// An in-memory store with helpers to populate it.
pub struct Fixture {
    pub db: Database,
    next_post: u64,
}

impl Fixture {
    pub async fn new() -> Self {
        let db = Database::new(":memory:")
            .await
            .expect("Failed to open in-memory database");
        Self { db, next_post: 0 }
    }

    pub fn config() -> RecommendConfig {
        RecommendConfig::default()
    }

    /// Add a channel whose display name is its name upper-cased.
    pub async fn channel(&self, id: &str, team: &str, kind: &str, delete_at: i64) {
        sqlx::query(
            "INSERT INTO channels (id, team_id, type, name, display_name, delete_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(team)
        .bind(kind)
        .bind(id)
        .bind(id.to_uppercase())
        .bind(delete_at)
        .execute(self.db.pool())
        .await
        .expect("Failed to insert channel");
    }

    /// Add a live open channel in `TEAM`.
    pub async fn open(&self, id: &str) {
        self.channel(id, TEAM, "O", 0).await;
    }

    pub async fn join(&self, channel: &str, user: &str) {
        sqlx::query("INSERT INTO channel_members (channel_id, user_id) VALUES (?, ?)")
            .bind(channel)
            .bind(user)
            .execute(self.db.pool())
            .await
            .expect("Failed to insert membership");
    }

    /// Join `count` generated users (`<channel>-m<i>`) to a channel.
    pub async fn populate(&self, channel: &str, count: usize) {
        for i in 0..count {
            self.join(channel, &format!("{channel}-m{i}")).await;
        }
    }

    /// Join users `<prefix>1..=<prefix><count>` to a channel in one statement.
    pub async fn populate_bulk(&self, channel: &str, prefix: &str, count: i64) {
        sqlx::query(
            r#"
            INSERT INTO channel_members (channel_id, user_id)
            WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?)
            SELECT ?, ? || n FROM seq
            "#,
        )
        .bind(count)
        .bind(channel)
        .bind(prefix)
        .execute(self.db.pool())
        .await
        .expect("Failed to bulk insert memberships");
    }

    /// Create open channels `<prefix>1..=<prefix><count>` in `TEAM`, each with
    /// `user` as its only member.
    pub async fn owned_channels_bulk(&self, prefix: &str, user: &str, count: i64) {
        sqlx::query(
            r#"
            INSERT INTO channels (id, team_id, type, name, display_name, delete_at)
            WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?)
            SELECT ? || n, ?, 'O', ? || n, ? || n, 0 FROM seq
            "#,
        )
        .bind(count)
        .bind(prefix)
        .bind(TEAM)
        .bind(prefix)
        .bind(prefix)
        .execute(self.db.pool())
        .await
        .expect("Failed to bulk insert channels");

        sqlx::query(
            r#"
            INSERT INTO channel_members (channel_id, user_id)
            WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?)
            SELECT ? || n, ? FROM seq
            "#,
        )
        .bind(count)
        .bind(prefix)
        .bind(user)
        .execute(self.db.pool())
        .await
        .expect("Failed to bulk insert memberships");
    }

    /// Add `count` posts to a channel, `minutes_ago` before `NOW_MS`.
    pub async fn posts(&mut self, channel: &str, count: usize, minutes_ago: i64) {
        for _ in 0..count {
            self.next_post += 1;
            sqlx::query("INSERT INTO posts (id, channel_id, create_at) VALUES (?, ?, ?)")
                .bind(format!("post-{}", self.next_post))
                .bind(channel)
                .bind(NOW_MS - minutes_ago * MINUTE_MS)
                .execute(self.db.pool())
                .await
                .expect("Failed to insert post");
        }
    }
}

pub fn names(channels: &[chandisco::ChannelData]) -> Vec<&str> {
    channels.iter().map(|c| c.name.as_str()).collect()
}
