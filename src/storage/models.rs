//! Data models for the storage layer

use crate::cli::types::{DivisionId, MatchId, PlayerId, Position, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// A named grouping of teams that play each other in a round robin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub division_id: DivisionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team_id: TeamId,
}

/// A fixture or completed match between two teams of one division.
///
/// Scores are `None` until a result is recorded, and are always set or
/// cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub date: NaiveDate,
    pub division_id: DivisionId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
}

impl Match {
    /// Both scores, if the match has been played.
    pub fn score(&self) -> Option<MatchScore> {
        match (self.team1_score, self.team2_score) {
            (Some(team1), Some(team2)) => Some(MatchScore { team1, team2 }),
            _ => None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.score().is_some()
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

/// Final score of a match, from team1's and team2's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub team1: u32,
    pub team2: u32,
}

/// The seven raw per-player counters recorded for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub attempts: u32,
    pub goals: u32,
    pub center_passes: u32,
    pub tips: u32,
    pub rebounds: u32,
    pub interceptions: u32,
    pub turnovers: u32,
}

impl StatLine {
    /// Shooting accuracy, or `None` when no attempts were made.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.goals as f64 / self.attempts as f64)
        }
    }
}

/// Counters summed over many stat lines.
///
/// Wider than `StatLine` so totals over a season cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTotals {
    pub attempts: u64,
    pub goals: u64,
    pub center_passes: u64,
    pub tips: u64,
    pub rebounds: u64,
    pub interceptions: u64,
    pub turnovers: u64,
}

impl StatTotals {
    /// Shooting accuracy, or `None` when no attempts were made.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.goals as f64 / self.attempts as f64)
        }
    }
}

impl AddAssign<StatLine> for StatTotals {
    fn add_assign(&mut self, line: StatLine) {
        self.attempts += u64::from(line.attempts);
        self.goals += u64::from(line.goals);
        self.center_passes += u64::from(line.center_passes);
        self.tips += u64::from(line.tips);
        self.rebounds += u64::from(line.rebounds);
        self.interceptions += u64::from(line.interceptions);
        self.turnovers += u64::from(line.turnovers);
    }
}

/// One player's counters for one match, as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub id: i64,
    pub player_id: PlayerId,
    pub match_id: MatchId,
    #[serde(flatten)]
    pub line: StatLine,
}

/// A stat line to be written alongside a match result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayerStat {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub line: StatLine,
}

/// Restricts which stat rows feed player aggregates.
///
/// Dates are inclusive and refer to the date of the owning match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatFilter {
    pub division_id: Option<DivisionId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// One validated line of a roster import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub team: String,
    pub division: String,
    pub player: String,
    pub position: Position,
}

/// Outcome of applying a roster import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub divisions_created: usize,
    pub teams_created: usize,
    pub players_created: usize,
    /// Rows naming a player already on that team
    pub players_skipped: usize,
}
