//! chandisco - print channel recommendations for one user.

use chandisco::config::{self, Config};
use chandisco::{ChannelData, Database, Recommender};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

#[derive(Parser)]
#[command(name = "chandisco", version, about = "Channel discovery recommendations")]
struct Cli {
    /// Path to the TOML configuration file (defaults apply when omitted)
    #[arg(short, long, env = "CHANDISCO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database path from the configuration
    #[arg(long, env = "CHANDISCO_DATABASE")]
    database: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Channels with the most recent posts
    Active {
        #[arg(long)]
        user: String,
        #[arg(long)]
        team: String,
        /// Activity window in minutes (defaults to recommend.activity_threshold_minutes)
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Channels with the most members
    Populated {
        #[arg(long)]
        user: String,
        #[arg(long)]
        team: String,
    },
    /// Channels popular among the members of a channel
    ByChannel {
        #[arg(long)]
        user: String,
        /// Anchor channel id
        #[arg(long)]
        channel: String,
        #[arg(long)]
        team: String,
    },
    /// Channels popular among the user's co-members
    CoMembers {
        #[arg(long)]
        user: String,
        #[arg(long)]
        team: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    chandisco::telemetry::init("info", cli.json_logs);

    let mut config = match &cli.config {
        Some(path) => Config::load(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to load config");
            e
        })?,
        None => Config::default(),
    };
    if let Some(path) = cli.database {
        config.database.path = path;
    }

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    let db = Database::connect(&config.database).await?;
    let recommender = Recommender::new(db.memberships(), &config.recommend);

    let channels: Vec<ChannelData> = match &cli.command {
        Command::Active {
            user,
            team,
            minutes,
        } => {
            let minutes = minutes.unwrap_or(config.recommend.activity_threshold_minutes);
            let now_ms = chrono::Utc::now().timestamp_millis();
            recommender
                .most_active_channels(user, team, minutes, now_ms)
                .await?
        }
        Command::Populated { user, team } => {
            recommender.most_populated_channels(user, team).await?
        }
        Command::ByChannel {
            user,
            channel,
            team,
        } => {
            match db.memberships().find_channel(channel).await? {
                Some(anchor) if anchor.team_id != *team => {
                    warn!(channel = %channel, team = %anchor.team_id, "Anchor channel belongs to another team");
                }
                Some(anchor) if !anchor.is_discoverable() => {
                    debug!(channel = %channel, "Anchor channel is not open or has been deleted");
                }
                Some(_) => {}
                None => warn!(channel = %channel, "Anchor channel not found"),
            }
            recommender
                .most_popular_channels_by_channel(user, channel, team)
                .await?
        }
        Command::CoMembers { user, team } => {
            recommender
                .most_popular_channels_by_user_co_members(user, team)
                .await?
        }
    };

    info!(count = channels.len(), "Recommendations computed");
    for channel in &channels {
        println!("{}\t{}", channel.name, channel.display_name);
    }

    db.close().await;
    Ok(())
}
