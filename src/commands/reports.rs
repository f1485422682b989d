//! Standings, player statistics and leaderboard commands

use super::print_json;
use crate::{
    cli::{types::{DivisionId, LeaderboardSort, PlayerId}, StatScope},
    report::{format_accuracy, render_leaderboard, render_standings},
    stats,
    storage::{StatFilter, TournamentDatabase},
    Result,
};

impl From<&StatScope> for StatFilter {
    fn from(scope: &StatScope) -> Self {
        StatFilter {
            division_id: scope.division,
            from: scope.from,
            to: scope.to,
        }
    }
}

/// Handle the standings command
pub fn handle_standings(db: &TournamentDatabase, division_id: DivisionId, json: bool) -> Result<()> {
    let division = db.require_division(division_id)?;
    let table = stats::division_standings(db, division_id)?;

    if json {
        print_json(&table)?;
    } else {
        print!("{}", render_standings(&division.name, &table));
    }
    Ok(())
}

/// Handle the player-stats command
pub fn handle_player_stats(
    db: &TournamentDatabase,
    player_id: PlayerId,
    scope: &StatScope,
    json: bool,
) -> Result<()> {
    let player = db.require_player(player_id)?;
    let totals = stats::player_totals(db, player_id, &StatFilter::from(scope))?;

    if json {
        print_json(&totals)?;
        return Ok(());
    }

    let t = &totals.totals;
    println!("{} ({}, {})", player.name, player.position.full_name(), player.id);
    println!("  Games played   {}", totals.games_played);
    println!("  Goals/attempts {}/{}", t.goals, t.attempts);
    println!("  Accuracy       {}", format_accuracy(totals.accuracy));
    println!("  Centre passes  {}", t.center_passes);
    println!("  Tips           {}", t.tips);
    println!("  Rebounds       {}", t.rebounds);
    println!("  Interceptions  {}", t.interceptions);
    println!("  Turnovers      {}", t.turnovers);
    Ok(())
}

/// Handle the leaderboard command
pub fn handle_leaderboard(
    db: &TournamentDatabase,
    scope: &StatScope,
    sort: LeaderboardSort,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut board = stats::leaderboard(db, &StatFilter::from(scope), sort)?;
    if let Some(limit) = limit {
        board.truncate(limit);
    }

    if json {
        print_json(&board)?;
    } else {
        let title = match scope.division {
            Some(division_id) => format!(
                "{} leaders: {}",
                db.require_division(division_id)?.name,
                sort
            ),
            None => format!("Leaders: {}", sort),
        };
        print!("{}", render_leaderboard(&title, &board));
    }
    Ok(())
}
