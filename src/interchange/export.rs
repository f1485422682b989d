//! CSV export of raw tables and computed statistics

use crate::{
    cli::types::LeaderboardSort,
    report::format_accuracy,
    stats::{self, Standing},
    storage::{StatFilter, TournamentDatabase},
    Result,
};
use csv::Writer;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TEAMS_FILE: &str = "teams.csv";
pub const PLAYERS_FILE: &str = "players.csv";
pub const MATCHES_FILE: &str = "matches.csv";
pub const STANDINGS_FILE: &str = "standings.csv";
pub const PLAYER_STATS_FILE: &str = "player_stats.csv";

/// Files written by `export_all` and how many data rows each holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub files: Vec<(PathBuf, usize)>,
}

/// Write every export file into `dir`, creating it if needed
pub fn export_all(db: &TournamentDatabase, dir: &Path) -> Result<ExportSummary> {
    std::fs::create_dir_all(dir)?;
    let mut summary = ExportSummary::default();

    let jobs: [(&str, fn(&TournamentDatabase, &mut Writer<std::fs::File>) -> Result<usize>); 5] = [
        (TEAMS_FILE, write_teams),
        (PLAYERS_FILE, write_players),
        (MATCHES_FILE, write_matches),
        (STANDINGS_FILE, write_standings),
        (PLAYER_STATS_FILE, write_player_stats),
    ];
    for (name, write) in jobs {
        let path = dir.join(name);
        let mut writer = Writer::from_path(&path)?;
        let rows = write(db, &mut writer)?;
        writer.flush()?;
        info!(path = %path.display(), rows, "exported");
        summary.files.push((path, rows));
    }
    Ok(summary)
}

pub fn write_teams<W: Write>(db: &TournamentDatabase, out: &mut Writer<W>) -> Result<usize> {
    let teams = db.list_teams(None)?;
    out.write_record(["id", "name", "division_id"])?;
    for team in &teams {
        out.serialize((team.id, &team.name, team.division_id))?;
    }
    Ok(teams.len())
}

pub fn write_players<W: Write>(db: &TournamentDatabase, out: &mut Writer<W>) -> Result<usize> {
    let players = db.list_players(None)?;
    out.write_record(["id", "name", "position", "team_id"])?;
    for player in &players {
        out.serialize((
            player.id,
            &player.name,
            player.position.to_string(),
            player.team_id,
        ))?;
    }
    Ok(players.len())
}

pub fn write_matches<W: Write>(db: &TournamentDatabase, out: &mut Writer<W>) -> Result<usize> {
    let matches = db.list_matches(None)?;
    out.write_record([
        "id",
        "date",
        "division_id",
        "team1_id",
        "team2_id",
        "team1_score",
        "team2_score",
    ])?;
    for m in &matches {
        out.serialize((
            m.id,
            m.date.to_string(),
            m.division_id,
            m.team1_id,
            m.team2_id,
            m.team1_score,
            m.team2_score,
        ))?;
    }
    Ok(matches.len())
}

/// Standings of every division, one block of rows per division
pub fn write_standings<W: Write>(db: &TournamentDatabase, out: &mut Writer<W>) -> Result<usize> {
    out.write_record([
        "division_id",
        "division",
        "rank",
        "team_id",
        "team",
        "games_played",
        "wins",
        "draws",
        "losses",
        "goals_for",
        "goals_against",
        "goal_difference",
        "points",
    ])?;

    let mut count = 0;
    for division in db.list_divisions()? {
        let table: Vec<Standing> = stats::division_standings(db, division.id)?;
        for s in &table {
            out.serialize((
                division.id,
                &division.name,
                s.rank,
                s.team_id,
                &s.team_name,
                s.games_played,
                s.wins,
                s.draws,
                s.losses,
                s.goals_for,
                s.goals_against,
                s.goal_difference,
                s.points,
            ))?;
        }
        count += table.len();
    }
    Ok(count)
}

/// Unfiltered totals for every player
pub fn write_player_stats<W: Write>(
    db: &TournamentDatabase,
    out: &mut Writer<W>,
) -> Result<usize> {
    let board = stats::leaderboard(db, &StatFilter::default(), LeaderboardSort::Goals)?;
    out.write_record([
        "player_id",
        "player",
        "position",
        "team_id",
        "games_played",
        "attempts",
        "goals",
        "center_passes",
        "tips",
        "rebounds",
        "interceptions",
        "turnovers",
        "accuracy",
    ])?;
    for entry in &board {
        let t = &entry.stats.totals;
        out.serialize((
            entry.stats.player_id,
            &entry.player_name,
            entry.position.to_string(),
            entry.team_id,
            entry.stats.games_played,
            t.attempts,
            t.goals,
            t.center_passes,
            t.tips,
            t.rebounds,
            t.interceptions,
            t.turnovers,
            format_accuracy(entry.stats.accuracy),
        ))?;
    }
    Ok(board.len())
}
