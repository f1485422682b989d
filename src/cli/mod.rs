//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    DivisionId, FixturePolicy, LeaderboardSort, MatchId, PlayerId, Position, StatEntry, TeamId,
};

/// Restricts which matches feed player statistics
#[derive(Debug, Args)]
pub struct StatScope {
    /// Only count matches in this division.
    #[clap(long, short)]
    pub division: Option<DivisionId>,

    /// Only count matches on or after this date (YYYY-MM-DD).
    #[clap(long)]
    pub from: Option<NaiveDate>,

    /// Only count matches on or before this date (YYYY-MM-DD).
    #[clap(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum DivisionCmd {
    /// Create a division
    Add { name: String },

    /// Rename a division
    Rename { id: DivisionId, name: String },

    /// Delete a division with all of its teams, players and matches
    Delete { id: DivisionId },

    /// List divisions by name
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Create a team in a division
    Add {
        name: String,

        #[clap(long, short)]
        division: DivisionId,
    },

    /// Rename a team
    Rename { id: TeamId, name: String },

    /// Move a team to another division (only before it has matches)
    Move {
        id: TeamId,

        #[clap(long, short)]
        division: DivisionId,
    },

    /// Delete a team with its players, matches and stats
    Delete { id: TeamId },

    /// List teams by name
    List {
        /// Only teams in this division.
        #[clap(long, short)]
        division: Option<DivisionId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Add a player to a team
    Add {
        name: String,

        /// GS, GA, WA, C, WD, GD or GK (full names accepted).
        #[clap(long, short)]
        position: Position,

        #[clap(long, short)]
        team: TeamId,
    },

    /// Change a player's name and/or position
    Update {
        id: PlayerId,

        #[clap(long, short)]
        name: Option<String>,

        #[clap(long, short)]
        position: Option<Position>,
    },

    /// Move a player to another team
    Transfer {
        id: PlayerId,

        #[clap(long, short)]
        team: TeamId,
    },

    /// Delete a player and their stats
    Delete { id: PlayerId },

    /// List players by name
    List {
        /// Only players on this team.
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum FixturesCmd {
    /// Create a single round robin for a division
    Generate {
        #[clap(long, short)]
        division: DivisionId,

        /// Date given to every fixture (defaults to today).
        #[clap(long)]
        date: Option<NaiveDate>,

        /// What to do if the division already has matches.
        #[clap(long, value_enum, default_value_t = FixturePolicy::Reject)]
        policy: FixturePolicy,
    },
}

#[derive(Debug, Subcommand)]
pub enum MatchCmd {
    /// Schedule one match by hand
    Add {
        #[clap(long, short)]
        division: DivisionId,

        #[clap(long)]
        team1: TeamId,

        #[clap(long)]
        team2: TeamId,

        /// Match date (defaults to today).
        #[clap(long)]
        date: Option<NaiveDate>,
    },

    /// Change a match date
    Reschedule {
        id: MatchId,

        #[clap(long)]
        date: NaiveDate,
    },

    /// Delete a match and its stats
    Delete { id: MatchId },

    /// List matches by date
    List {
        /// Only matches in this division.
        #[clap(long, short)]
        division: Option<DivisionId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one match with its player stats
    Show {
        id: MatchId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ResultCmd {
    /// Enter the final score and player stats of a fixture
    Record {
        id: MatchId,

        #[clap(long)]
        score1: u32,

        #[clap(long)]
        score2: u32,

        /// Player stat line, repeatable:
        /// `--stat PLAYER_ID=attempts,goals,center_passes,tips,rebounds,interceptions,turnovers`.
        /// Trailing counters default to zero.
        #[clap(long = "stat")]
        stats: Vec<StatEntry>,
    },

    /// Remove a recorded result, turning the match back into a fixture
    Clear { id: MatchId },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database (optionally with sample data)
    Init {
        /// Insert a small sample tournament.
        #[clap(long)]
        sample: bool,

        /// Drop all existing tables first.
        #[clap(long)]
        reset: bool,
    },

    /// Manage divisions
    Division {
        #[clap(subcommand)]
        cmd: DivisionCmd,
    },

    /// Manage teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage players
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Generate round-robin fixtures
    Fixtures {
        #[clap(subcommand)]
        cmd: FixturesCmd,
    },

    /// Manage individual matches
    Match {
        #[clap(subcommand)]
        cmd: MatchCmd,
    },

    /// Record or clear match results
    Result {
        #[clap(subcommand)]
        cmd: ResultCmd,
    },

    /// Show the standings table of a division
    Standings {
        #[clap(long, short)]
        division: DivisionId,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's aggregated statistics
    PlayerStats {
        id: PlayerId,

        #[clap(flatten)]
        scope: StatScope,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank players by a statistic
    Leaderboard {
        #[clap(flatten)]
        scope: StatScope,

        #[clap(long, value_enum, default_value_t = LeaderboardSort::Goals)]
        sort: LeaderboardSort,

        /// Show only the top N players.
        #[clap(long, short)]
        limit: Option<usize>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Import players from a CSV with Team,Division,Player,Position columns
    Import {
        file: PathBuf,
    },

    /// Export teams, players, matches, standings and player stats as CSV files
    Export {
        /// Directory to write the CSV files into.
        dir: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "netball-stats", about = "Netball tournament stats", version)]
pub struct NetballCli {
    /// Database file (or set `NETBALL_STATS_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log debug detail to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
