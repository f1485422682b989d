//! Player totals and leaderboards derived from stat rows

use crate::cli::types::{LeaderboardSort, PlayerId, Position, TeamId};
use crate::storage::{Player, PlayerStat, StatTotals};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// A player's counters summed over every qualifying match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerTotals {
    pub player_id: PlayerId,
    pub games_played: u32,
    #[serde(flatten)]
    pub totals: StatTotals,
    /// goals / attempts; `None` when the player has no attempts
    pub accuracy: Option<f64>,
}

/// Sum `rows` belonging to `player_id`.
///
/// Rows for other players are skipped, so the full stat table of a
/// division can be passed in. No rows gives an all-zero record.
pub fn aggregate_player(player_id: PlayerId, rows: &[PlayerStat]) -> PlayerTotals {
    let mut totals = StatTotals::default();
    let mut matches = BTreeSet::new();
    for row in rows.iter().filter(|r| r.player_id == player_id) {
        totals += row.line;
        matches.insert(row.match_id);
    }

    PlayerTotals {
        player_id,
        games_played: matches.len() as u32,
        accuracy: totals.accuracy(),
        totals,
    }
}

/// A leaderboard row: player identity plus totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_name: String,
    pub position: Position,
    pub team_id: TeamId,
    #[serde(flatten)]
    pub stats: PlayerTotals,
}

/// Aggregate every player in `players` and rank them by `sort`.
///
/// Players without rows appear with zero totals. Ties fall back to name
/// then id.
pub fn compute_leaderboard(
    players: &[Player],
    rows: &[PlayerStat],
    sort: LeaderboardSort,
) -> Vec<LeaderboardEntry> {
    let mut by_player: HashMap<PlayerId, Vec<PlayerStat>> = HashMap::new();
    for row in rows {
        by_player.entry(row.player_id).or_default().push(row.clone());
    }

    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .map(|player| {
            let own = by_player.get(&player.id).map(Vec::as_slice).unwrap_or(&[]);
            LeaderboardEntry {
                rank: 0,
                player_name: player.name.clone(),
                position: player.position,
                team_id: player.team_id,
                stats: aggregate_player(player.id, own),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        compare_by(sort, &a.stats, &b.stats)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then(a.stats.player_id.cmp(&b.stats.player_id))
    });
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}

/// Better player first
fn compare_by(sort: LeaderboardSort, a: &PlayerTotals, b: &PlayerTotals) -> Ordering {
    let (a_line, b_line) = (&a.totals, &b.totals);
    match sort {
        LeaderboardSort::Goals => b_line.goals.cmp(&a_line.goals),
        LeaderboardSort::Accuracy => match (a.accuracy, b.accuracy) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        LeaderboardSort::Attempts => b_line.attempts.cmp(&a_line.attempts),
        LeaderboardSort::CenterPasses => b_line.center_passes.cmp(&a_line.center_passes),
        LeaderboardSort::Tips => b_line.tips.cmp(&a_line.tips),
        LeaderboardSort::Rebounds => b_line.rebounds.cmp(&a_line.rebounds),
        LeaderboardSort::Interceptions => b_line.interceptions.cmp(&a_line.interceptions),
        LeaderboardSort::Turnovers => a_line.turnovers.cmp(&b_line.turnovers),
    }
}
