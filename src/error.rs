//! Error types for the netball tournament stats tool

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, NetballError>;

/// A single rejected row from a CSV import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the source file (the header is line 1).
    pub line: u64,
    pub message: String,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

#[derive(Error, Debug)]
pub enum NetballError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Database path not provided and no data directory could be determined (set {env_var})")]
    MissingDatabasePath { env_var: String },

    #[error("Invalid {entity} id: {value}")]
    InvalidId { entity: &'static str, value: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{entity} name must not be empty")]
    EmptyName { entity: &'static str },

    #[error("{entity} named '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("Invalid stat line '{value}': {reason}")]
    InvalidStatLine { value: String, reason: String },

    #[error("A team cannot play itself (team {team_id})")]
    SameTeam { team_id: i64 },

    #[error("Team {team_id} does not belong to division {division_id}")]
    TeamNotInDivision { team_id: i64, division_id: i64 },

    #[error("Teams {team1_id} and {team2_id} are already paired in division {division_id}")]
    DuplicatePairing {
        division_id: i64,
        team1_id: i64,
        team2_id: i64,
    },

    #[error("Division {division_id} already has {count} matches; regenerate to replace them")]
    FixturesExist { division_id: i64, count: u32 },

    #[error("Team {team_id} already has {count} matches in its division and cannot be moved")]
    TeamHasMatches { team_id: i64, count: u32 },

    #[error("Match {match_id} already has a result")]
    ResultAlreadyRecorded { match_id: i64 },

    #[error("Player {player_id}: goals ({goals}) exceed attempts ({attempts})")]
    GoalsExceedAttempts {
        player_id: i64,
        goals: u32,
        attempts: u32,
    },

    #[error("Player {player_id} does not play for either team in match {match_id}")]
    PlayerNotInMatch { player_id: i64, match_id: i64 },

    #[error("Player {player_id} has more than one stat line for match {match_id}")]
    DuplicatePlayerStat { player_id: i64, match_id: i64 },

    #[error("Import rejected: {}", format_row_errors(.errors))]
    ImportRejected { errors: Vec<RowError> },
}

fn format_row_errors(errors: &[RowError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<anyhow::Error> for NetballError {
    fn from(err: anyhow::Error) -> Self {
        // Storage code wraps typed errors in anyhow; unwrap them again so
        // callers can still match on the variant.
        let err = match err.downcast::<NetballError>() {
            Ok(netball) => return netball,
            Err(err) => err,
        };
        match err.downcast::<rusqlite::Error>() {
            Ok(sqlite) => NetballError::Database(sqlite),
            Err(err) => NetballError::Storage {
                message: format!("{:#}", err),
            },
        }
    }
}

impl NetballError {
    /// True for errors raised by input validation, before anything was written.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NetballError::EmptyName { .. }
                | NetballError::InvalidId { .. }
                | NetballError::DuplicateName { .. }
                | NetballError::InvalidPosition { .. }
                | NetballError::InvalidDate { .. }
                | NetballError::InvalidStatLine { .. }
                | NetballError::SameTeam { .. }
                | NetballError::TeamNotInDivision { .. }
                | NetballError::DuplicatePairing { .. }
                | NetballError::TeamHasMatches { .. }
                | NetballError::ResultAlreadyRecorded { .. }
                | NetballError::GoalsExceedAttempts { .. }
                | NetballError::PlayerNotInMatch { .. }
                | NetballError::DuplicatePlayerStat { .. }
                | NetballError::ImportRejected { .. }
        )
    }
}
