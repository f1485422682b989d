//! Round-robin fixture generation.

use crate::{
    cli::types::{DivisionId, FixturePolicy, MatchId, TeamId},
    error::NetballError,
    storage::{matches::insert_fixture, TournamentDatabase},
    Result,
};
use chrono::NaiveDate;
use rusqlite::params;
use tracing::{debug, info};


/// Every unordered pairing of `team_ids`, each exactly once.
///
/// Pairs come out in index order: `(t0, t1), (t0, t2), .., (t1, t2), ..`, so
/// a fixed input order always yields the same fixture list. Repeated ids
/// are collapsed to their first occurrence.
///
/// ```rust
/// use netball_stats::{fixtures::round_robin_pairings, TeamId};
///
/// let teams: Vec<TeamId> = (1..=4).map(TeamId::new).collect();
/// let pairs = round_robin_pairings(&teams);
/// assert_eq!(pairs.len(), 6);
/// assert_eq!(pairs[0], (TeamId::new(1), TeamId::new(2)));
/// ```
pub fn round_robin_pairings(team_ids: &[TeamId]) -> Vec<(TeamId, TeamId)> {
    let mut teams: Vec<TeamId> = Vec::with_capacity(team_ids.len());
    for id in team_ids {
        if !teams.contains(id) {
            teams.push(*id);
        }
    }

    let n = teams.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            pairs.push((*home, *away));
        }
    }
    pairs
}

/// Generate and store a single round robin for a division.
///
/// Every fixture gets `date` and no score. With `FixturePolicy::Reject` a
/// division that already has matches is left alone and `FixturesExist` is
/// returned; `FixturePolicy::Regenerate` replaces them. Either way the
/// whole operation is one transaction.
pub fn generate_fixtures(
    db: &mut TournamentDatabase,
    division_id: DivisionId,
    date: NaiveDate,
    policy: FixturePolicy,
) -> Result<Vec<MatchId>> {
    db.require_division(division_id)?;
    let existing = db.count_matches(division_id)?;
    if existing > 0 && policy == FixturePolicy::Reject {
        return Err(NetballError::FixturesExist {
            division_id: division_id.as_i64(),
            count: existing,
        });
    }

    let team_ids = db.division_team_ids(division_id)?;
    let pairs = round_robin_pairings(&team_ids);
    debug!(
        division_id = %division_id,
        teams = team_ids.len(),
        fixtures = pairs.len(),
        "computed round robin"
    );

    let tx = db.conn.transaction()?;
    if existing > 0 {
        tx.execute(
            "DELETE FROM matches WHERE division_id = ?",
            params![division_id.as_i64()],
        )?;
        info!(division_id = %division_id, removed = existing, "cleared existing fixtures");
    }

    let mut match_ids = Vec::with_capacity(pairs.len());
    for (team1_id, team2_id) in pairs {
        match_ids.push(insert_fixture(&tx, division_id, team1_id, team2_id, date)?);
    }
    tx.commit()?;

    info!(division_id = %division_id, created = match_ids.len(), "generated fixtures");
    Ok(match_ids)
}
