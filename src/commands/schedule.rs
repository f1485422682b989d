//! Fixture, match and result commands

use super::{print_json, today};
use crate::{
    cli::{types::TeamId, FixturesCmd, MatchCmd, ResultCmd},
    fixtures::generate_fixtures,
    report::format_accuracy,
    storage::{Match, MatchScore, NewPlayerStat, PlayerStat, TournamentDatabase},
    Result,
};
use serde::Serialize;

/// A match together with the stat lines recorded for it
#[derive(Debug, Serialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub fixture: Match,
    pub stats: Vec<PlayerStat>,
}

/// Handle `fixtures` subcommands
pub fn handle_fixtures(db: &mut TournamentDatabase, cmd: FixturesCmd) -> Result<()> {
    match cmd {
        FixturesCmd::Generate {
            division,
            date,
            policy,
        } => {
            let date = date.unwrap_or_else(today);
            let created = generate_fixtures(db, division, date, policy)?;
            println!(
                "✓ Generated {} fixtures for division {} on {}",
                created.len(),
                division,
                date
            );
        }
    }
    Ok(())
}

/// Handle `match` subcommands
pub fn handle_match(db: &mut TournamentDatabase, cmd: MatchCmd) -> Result<()> {
    match cmd {
        MatchCmd::Add {
            division,
            team1,
            team2,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let id = db.create_match(division, team1, team2, date)?;
            println!("✓ Scheduled match {} on {}", id, date);
        }
        MatchCmd::Reschedule { id, date } => {
            db.reschedule_match(id, date)?;
            println!("✓ Match {} moved to {}", id, date);
        }
        MatchCmd::Delete { id } => {
            db.delete_match(id)?;
            println!("✓ Deleted match {}", id);
        }
        MatchCmd::List { division, json } => {
            let matches = db.list_matches(division)?;
            if json {
                print_json(&matches)?;
            } else if matches.is_empty() {
                println!("No matches");
            } else {
                for m in &matches {
                    println!("{}", describe_match(db, m)?);
                }
            }
        }
        MatchCmd::Show { id, json } => {
            let detail = MatchDetail {
                fixture: db.require_match(id)?,
                stats: db.match_player_stats(id)?,
            };
            if json {
                print_json(&detail)?;
            } else {
                println!("{}", describe_match(db, &detail.fixture)?);
                for stat in &detail.stats {
                    let name = db
                        .get_player(stat.player_id)?
                        .map(|p| p.name)
                        .unwrap_or_else(|| stat.player_id.to_string());
                    let l = &stat.line;
                    println!(
                        "      {:<24} {}/{} ({})  CP {}  Tip {}  Reb {}  Int {}  TO {}",
                        name,
                        l.goals,
                        l.attempts,
                        format_accuracy(l.accuracy()),
                        l.center_passes,
                        l.tips,
                        l.rebounds,
                        l.interceptions,
                        l.turnovers
                    );
                }
            }
        }
    }
    Ok(())
}

/// Handle `result` subcommands
pub fn handle_result(db: &mut TournamentDatabase, cmd: ResultCmd) -> Result<()> {
    match cmd {
        ResultCmd::Record {
            id,
            score1,
            score2,
            stats,
        } => {
            let stats: Vec<NewPlayerStat> = stats.into_iter().map(NewPlayerStat::from).collect();
            let score = MatchScore {
                team1: score1,
                team2: score2,
            };
            db.record_result(id, score, &stats)?;
            println!(
                "✓ Recorded {}-{} for match {} ({} stat lines)",
                score1,
                score2,
                id,
                stats.len()
            );
        }
        ResultCmd::Clear { id } => {
            db.clear_result(id)?;
            println!("✓ Match {} is a fixture again", id);
        }
    }
    Ok(())
}

/// One-line summary: id, date, teams and score (or "vs" if unplayed)
fn describe_match(db: &TournamentDatabase, m: &Match) -> Result<String> {
    let name = |id: TeamId| -> Result<String> {
        Ok(db
            .get_team(id)?
            .map(|t| t.name)
            .unwrap_or_else(|| format!("team {}", id)))
    };
    let home = name(m.team1_id)?;
    let away = name(m.team2_id)?;

    Ok(match m.score() {
        Some(score) => format!(
            "{:>4}  {}  {} {} - {} {}",
            m.id, m.date, home, score.team1, score.team2, away
        ),
        None => format!("{:>4}  {}  {} vs {}", m.id, m.date, home, away),
    })
}
