//! Team standings derived from completed matches

use crate::cli::types::TeamId;
use crate::storage::{Match, Team};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

pub const POINTS_FOR_WIN: u64 = 3;
pub const POINTS_FOR_DRAW: u64 = 1;

/// One row of a division's standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based position after tie-breaks
    pub rank: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u64,
}

impl Standing {
    fn empty(team: &Team) -> Self {
        Self {
            rank: 0,
            team_id: team.id,
            team_name: team.name.clone(),
            games_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.games_played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.draws += 1,
            Ordering::Less => self.losses += 1,
        }
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;
        self.points = POINTS_FOR_WIN * u64::from(self.wins) + POINTS_FOR_DRAW * u64::from(self.draws);
    }
}

/// Compute the standings table for `teams` from raw match rows.
///
/// Unplayed matches and matches against teams outside `teams` are ignored,
/// and every team gets a row even if it has not played. Ordering: points,
/// then goal difference, then goals scored (all descending), then team
/// name and id.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<Standing> {
    let mut rows: Vec<Standing> = teams.iter().map(Standing::empty).collect();
    let index: HashMap<TeamId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.team_id, i))
        .collect();

    for m in matches {
        let Some(score) = m.score() else {
            continue;
        };
        let (Some(&home), Some(&away)) = (index.get(&m.team1_id), index.get(&m.team2_id)) else {
            continue;
        };
        rows[home].record(score.team1, score.team2);
        rows[away].record(score.team2, score.team1);
    }

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
            .then(a.team_id.cmp(&b.team_id))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}
