//! Netball Tournament Stats Library
//!
//! Records divisions, teams, players and matches in a local SQLite file and
//! derives standings and player statistics from the raw results on demand.
//!
//! ## Features
//!
//! - **Tournament Data**: Divisions, teams, players, fixtures and results with cascading deletes
//! - **Fixture Generation**: Single round robin for every division
//! - **Standings**: Win/draw/loss points table with documented tie-breaks
//! - **Player Statistics**: Shooting accuracy, centre passes, turnovers and more
//! - **CSV Interchange**: Roster import and full data export
//!
//! ## Quick Start
//!
//! ```rust
//! use netball_stats::{fixtures, stats, storage::*, FixturePolicy, Position};
//! use chrono::NaiveDate;
//!
//! # fn example() -> netball_stats::Result<()> {
//! let mut db = TournamentDatabase::new_in_memory()?;
//! let premier = db.create_division("Premier")?;
//! let dragons = db.create_team("Red Dragons", premier)?;
//! let eagles = db.create_team("Blue Eagles", premier)?;
//! db.create_player("Alice Johnson", Position::GS, dragons)?;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let ids = fixtures::generate_fixtures(&mut db, premier, date, FixturePolicy::Reject)?;
//! db.record_result(ids[0], MatchScore { team1: 45, team2: 42 }, &[])?;
//!
//! let table = stats::division_standings(&db, premier)?;
//! assert_eq!(table[0].team_id, dragons);
//! assert_eq!(table[1].team_id, eagles);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point every command at a database file without passing `--db`:
//! ```bash
//! export NETBALL_STATS_DB=~/tournaments/winter.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod fixtures;
pub mod interchange;
pub mod report;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    DivisionId, FixturePolicy, LeaderboardSort, MatchId, PlayerId, Position, TeamId,
};
pub use error::{NetballError, Result};

pub const DB_PATH_ENV_VAR: &str = "NETBALL_STATS_DB";
