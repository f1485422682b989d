//! Bulk roster application for CSV import

use super::{models::*, schema::TournamentDatabase};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Transaction};
use std::collections::HashMap;
use tracing::info;

impl TournamentDatabase {
    /// Apply validated roster rows in a single transaction.
    ///
    /// Divisions and teams named by a row are created when missing. A
    /// player already on the team under the same name is skipped. Any
    /// failure rolls back every row.
    pub fn apply_roster(&mut self, rows: &[RosterRow]) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();
        let mut divisions: HashMap<String, i64> = HashMap::new();
        let mut teams: HashMap<(i64, String), i64> = HashMap::new();

        let tx = self.conn.transaction()?;
        for row in rows {
            let division_id = match divisions.get(&row.division) {
                Some(id) => *id,
                None => {
                    let (id, created) = find_or_create_division(&tx, &row.division)?;
                    if created {
                        summary.divisions_created += 1;
                    }
                    divisions.insert(row.division.clone(), id);
                    id
                }
            };

            let team_key = (division_id, row.team.clone());
            let team_id = match teams.get(&team_key) {
                Some(id) => *id,
                None => {
                    let (id, created) = find_or_create_team(&tx, division_id, &row.team)?;
                    if created {
                        summary.teams_created += 1;
                    }
                    teams.insert(team_key, id);
                    id
                }
            };

            let existing: Option<i64> = tx
                .query_row(
                    "SELECT id FROM players WHERE team_id = ? AND name = ? LIMIT 1",
                    params![team_id, row.player],
                    |r| r.get(0),
                )
                .optional()?;
            if existing.is_some() {
                summary.players_skipped += 1;
                continue;
            }

            tx.execute(
                "INSERT INTO players (name, position, team_id) VALUES (?, ?, ?)",
                params![row.player, row.position.to_string(), team_id],
            )?;
            summary.players_created += 1;
        }
        tx.commit()?;

        info!(?summary, "applied roster import");
        Ok(summary)
    }
}

fn find_or_create_division(tx: &Transaction, name: &str) -> Result<(i64, bool)> {
    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM divisions WHERE name = ?",
            params![name],
            |r| r.get(0),
        )
        .optional()?;
    if let Some(id) = existing {
        return Ok((id, false));
    }
    tx.execute("INSERT INTO divisions (name) VALUES (?)", params![name])?;
    Ok((tx.last_insert_rowid(), true))
}

fn find_or_create_team(tx: &Transaction, division_id: i64, name: &str) -> Result<(i64, bool)> {
    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM teams WHERE division_id = ? AND name = ?",
            params![division_id, name],
            |r| r.get(0),
        )
        .optional()?;
    if let Some(id) = existing {
        return Ok((id, false));
    }
    tx.execute(
        "INSERT INTO teams (name, division_id) VALUES (?, ?)",
        params![name, division_id],
    )?;
    Ok((tx.last_insert_rowid(), true))
}
