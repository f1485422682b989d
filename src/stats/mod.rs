//! On-demand statistics.
//!
//! Standings and player aggregates are pure functions of the raw match and
//! stat rows. Nothing computed here is ever written back; every call
//! re-reads the rows and recomputes.

pub mod players;
pub mod standings;


pub use players::{aggregate_player, compute_leaderboard, LeaderboardEntry, PlayerTotals};
pub use standings::{compute_standings, Standing};

use crate::{
    cli::types::{DivisionId, LeaderboardSort, PlayerId},
    storage::{StatFilter, TournamentDatabase},
    Result,
};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Standings for one division from its completed matches
pub fn division_standings(db: &TournamentDatabase, division_id: DivisionId) -> Result<Vec<Standing>> {
    db.require_division(division_id)?;
    let teams = db.list_teams(Some(division_id))?;
    let matches = db.completed_matches(division_id)?;
    debug!(
        division_id = %division_id,
        teams = teams.len(),
        completed = matches.len(),
        "computing standings"
    );
    Ok(compute_standings(&teams, &matches))
}

/// Totals for one player over the rows selected by `filter`
pub fn player_totals(
    db: &TournamentDatabase,
    player_id: PlayerId,
    filter: &StatFilter,
) -> Result<PlayerTotals> {
    db.require_player(player_id)?;
    let rows = db.player_stat_rows(Some(player_id), filter)?;
    Ok(aggregate_player(player_id, &rows))
}

/// Ranked totals for every player in scope.
///
/// With a division in `filter` the division's current players are listed,
/// plus anyone with stat rows there who has since transferred out;
/// otherwise every player is.
pub fn leaderboard(
    db: &TournamentDatabase,
    filter: &StatFilter,
    sort: LeaderboardSort,
) -> Result<Vec<LeaderboardEntry>> {
    let rows = db.player_stat_rows(None, filter)?;
    let players = match filter.division_id {
        Some(division_id) => {
            db.require_division(division_id)?;
            let mut players = db.list_division_players(division_id)?;
            let listed: HashSet<PlayerId> = players.iter().map(|p| p.id).collect();
            let departed: BTreeSet<PlayerId> = rows
                .iter()
                .map(|r| r.player_id)
                .filter(|id| !listed.contains(id))
                .collect();
            for player_id in departed {
                players.push(db.require_player(player_id)?);
            }
            players
        }
        None => db.list_players(None)?,
    };
    debug!(players = players.len(), rows = rows.len(), %sort, "computing leaderboard");
    Ok(compute_leaderboard(&players, &rows, sort))
}
