//! Division, team and player management commands

use super::print_json;
use crate::{
    cli::{DivisionCmd, PlayerCmd, TeamCmd},
    storage::TournamentDatabase,
    Result,
};

/// Handle `division` subcommands
pub fn handle_division(db: &mut TournamentDatabase, cmd: DivisionCmd) -> Result<()> {
    match cmd {
        DivisionCmd::Add { name } => {
            let id = db.create_division(&name)?;
            println!("✓ Created division {} ({})", name.trim(), id);
        }
        DivisionCmd::Rename { id, name } => {
            db.rename_division(id, &name)?;
            println!("✓ Renamed division {} to {}", id, name.trim());
        }
        DivisionCmd::Delete { id } => {
            let division = db.require_division(id)?;
            db.delete_division(id)?;
            println!("✓ Deleted division {} and everything in it", division.name);
        }
        DivisionCmd::List { json } => {
            let divisions = db.list_divisions()?;
            if json {
                print_json(&divisions)?;
            } else if divisions.is_empty() {
                println!("No divisions");
            } else {
                for d in &divisions {
                    let teams = db.list_teams(Some(d.id))?.len();
                    println!("{:>4}  {} ({} teams)", d.id, d.name, teams);
                }
            }
        }
    }
    Ok(())
}

/// Handle `team` subcommands
pub fn handle_team(db: &mut TournamentDatabase, cmd: TeamCmd) -> Result<()> {
    match cmd {
        TeamCmd::Add { name, division } => {
            let id = db.create_team(&name, division)?;
            println!("✓ Created team {} ({})", name.trim(), id);
        }
        TeamCmd::Rename { id, name } => {
            db.rename_team(id, &name)?;
            println!("✓ Renamed team {} to {}", id, name.trim());
        }
        TeamCmd::Move { id, division } => {
            db.move_team(id, division)?;
            println!("✓ Moved team {} to division {}", id, division);
        }
        TeamCmd::Delete { id } => {
            let team = db.require_team(id)?;
            db.delete_team(id)?;
            println!("✓ Deleted team {} with its players and matches", team.name);
        }
        TeamCmd::List { division, json } => {
            let teams = db.list_teams(division)?;
            if json {
                print_json(&teams)?;
            } else if teams.is_empty() {
                println!("No teams");
            } else {
                for t in &teams {
                    let division_name = db
                        .get_division(t.division_id)?
                        .map(|d| d.name)
                        .unwrap_or_default();
                    println!("{:>4}  {:<24} {}", t.id, t.name, division_name);
                }
            }
        }
    }
    Ok(())
}

/// Handle `player` subcommands
pub fn handle_player(db: &mut TournamentDatabase, cmd: PlayerCmd) -> Result<()> {
    match cmd {
        PlayerCmd::Add {
            name,
            position,
            team,
        } => {
            let id = db.create_player(&name, position, team)?;
            println!("✓ Added {} ({}) as {}", name.trim(), id, position.full_name());
        }
        PlayerCmd::Update { id, name, position } => {
            db.update_player(id, name.as_deref(), position)?;
            let player = db.require_player(id)?;
            println!("✓ Updated {} ({}, {})", player.name, player.id, player.position);
        }
        PlayerCmd::Transfer { id, team } => {
            db.transfer_player(id, team)?;
            println!("✓ Player {} now plays for team {}", id, team);
        }
        PlayerCmd::Delete { id } => {
            let player = db.require_player(id)?;
            db.delete_player(id)?;
            println!("✓ Deleted player {}", player.name);
        }
        PlayerCmd::List { team, json } => {
            let players = db.list_players(team)?;
            if json {
                print_json(&players)?;
            } else if players.is_empty() {
                println!("No players");
            } else {
                for p in &players {
                    let team_name = db
                        .get_team(p.team_id)?
                        .map(|t| t.name)
                        .unwrap_or_default();
                    println!("{:>4}  {:<24} {:<3} {}", p.id, p.name, p.position, team_name);
                }
            }
        }
    }
    Ok(())
}
