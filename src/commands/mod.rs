//! Command implementations for the netball stats CLI

pub mod entities;
pub mod reports;
pub mod schedule;
pub mod transfer;

#[cfg(test)]
mod tests;

use crate::{error::NetballError, storage::TournamentDatabase, Result, DB_PATH_ENV_VAR};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// File name used under the platform data directory
pub const DEFAULT_DB_FILE: &str = "netball_stats.db";

/// Resolve the database path from the CLI flag or environment.
///
/// Order: `--db`, then `NETBALL_STATS_DB`, then
/// `<data dir>/netball-stats/netball_stats.db`.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    if let Ok(value) = std::env::var(DB_PATH_ENV_VAR) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join("netball-stats").join(DEFAULT_DB_FILE))
        .ok_or_else(|| NetballError::MissingDatabasePath {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })
}

/// Handle the init command
pub fn handle_init(db: &mut TournamentDatabase, sample: bool, reset: bool) -> Result<()> {
    if reset {
        db.reset()?;
        println!("✓ Database reset");
    }
    if sample {
        let summary = db.seed_sample_data()?;
        println!(
            "✓ Sample data: {} divisions, {} teams, {} players, {} matches",
            summary.divisions, summary.teams, summary.players, summary.matches
        );
    }

    let tables = db.table_names()?;
    debug!(?tables, "schema ready");
    info!(tables = tables.len(), "database initialised");
    println!("✓ Database ready ({} tables)", tables.len());
    Ok(())
}

/// Print `value` as pretty JSON
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Today's date in local time, the default for new fixtures
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
