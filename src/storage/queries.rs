//! Division, team and player CRUD operations

use super::{models::*, schema::TournamentDatabase};
use crate::cli::types::{DivisionId, PlayerId, Position, TeamId};
use crate::error::NetballError;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

/// Trim a user-supplied name, rejecting blank ones.
pub(crate) fn clean_name(entity: &'static str, name: &str) -> std::result::Result<String, NetballError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(NetballError::EmptyName { entity })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Turn a UNIQUE violation into `DuplicateName`, pass anything else through.
pub(crate) fn unique_violation(
    err: rusqlite::Error,
    entity: &'static str,
    name: &str,
) -> anyhow::Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            NetballError::DuplicateName {
                entity,
                name: name.to_string(),
            }
            .into()
        }
        _ => err.into(),
    }
}

impl TournamentDatabase {
    // ---- divisions ----

    pub fn create_division(&mut self, name: &str) -> Result<DivisionId> {
        let name = clean_name(DivisionId::ENTITY, name)?;
        self.conn
            .execute("INSERT INTO divisions (name) VALUES (?)", params![name])
            .map_err(|e| unique_violation(e, DivisionId::ENTITY, &name))?;

        let id = DivisionId::new(self.conn.last_insert_rowid());
        info!(division_id = %id, name = %name, "created division");
        Ok(id)
    }

    pub fn rename_division(&mut self, id: DivisionId, name: &str) -> Result<()> {
        let name = clean_name(DivisionId::ENTITY, name)?;
        let changed = self
            .conn
            .execute(
                "UPDATE divisions SET name = ? WHERE id = ?",
                params![name, id.as_i64()],
            )
            .map_err(|e| unique_violation(e, DivisionId::ENTITY, &name))?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        Ok(())
    }

    /// Delete a division together with its teams, players and matches
    pub fn delete_division(&mut self, id: DivisionId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM divisions WHERE id = ?", params![id.as_i64()])?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        info!(division_id = %id, "deleted division");
        Ok(())
    }

    pub fn get_division(&self, id: DivisionId) -> Result<Option<Division>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name FROM divisions WHERE id = ?",
                params![id.as_i64()],
                row_to_division,
            )
            .optional()?)
    }

    /// Like `get_division`, but a missing row is an error
    pub fn require_division(&self, id: DivisionId) -> Result<Division> {
        self.get_division(id)?
            .ok_or_else(|| id.not_found().into())
    }

    pub fn find_division_by_name(&self, name: &str) -> Result<Option<Division>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name FROM divisions WHERE name = ?",
                params![name.trim()],
                row_to_division,
            )
            .optional()?)
    }

    pub fn list_divisions(&self) -> Result<Vec<Division>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM divisions ORDER BY name, id")?;
        let rows = stmt.query_map([], row_to_division)?;

        let mut divisions = Vec::new();
        for row in rows {
            divisions.push(row?);
        }
        Ok(divisions)
    }

    // ---- teams ----

    pub fn create_team(&mut self, name: &str, division_id: DivisionId) -> Result<TeamId> {
        let name = clean_name(TeamId::ENTITY, name)?;
        self.require_division(division_id)?;

        self.conn
            .execute(
                "INSERT INTO teams (name, division_id) VALUES (?, ?)",
                params![name, division_id.as_i64()],
            )
            .map_err(|e| unique_violation(e, TeamId::ENTITY, &name))?;

        let id = TeamId::new(self.conn.last_insert_rowid());
        info!(team_id = %id, division_id = %division_id, name = %name, "created team");
        Ok(id)
    }

    pub fn rename_team(&mut self, id: TeamId, name: &str) -> Result<()> {
        let name = clean_name(TeamId::ENTITY, name)?;
        let changed = self
            .conn
            .execute(
                "UPDATE teams SET name = ? WHERE id = ?",
                params![name, id.as_i64()],
            )
            .map_err(|e| unique_violation(e, TeamId::ENTITY, &name))?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        Ok(())
    }

    /// Move a team to another division.
    ///
    /// Refused while the team has matches, since those belong to the old
    /// division's round robin.
    pub fn move_team(&mut self, id: TeamId, division_id: DivisionId) -> Result<()> {
        let team = self.require_team(id)?;
        self.require_division(division_id)?;
        if team.division_id == division_id {
            return Ok(());
        }

        let count = self.count_team_matches(id)?;
        if count > 0 {
            return Err(NetballError::TeamHasMatches {
                team_id: id.as_i64(),
                count,
            }
            .into());
        }

        self.conn
            .execute(
                "UPDATE teams SET division_id = ? WHERE id = ?",
                params![division_id.as_i64(), id.as_i64()],
            )
            .map_err(|e| unique_violation(e, TeamId::ENTITY, &team.name))?;
        info!(team_id = %id, from = %team.division_id, to = %division_id, "moved team");
        Ok(())
    }

    /// Delete a team; its players, matches and their stats go with it
    pub fn delete_team(&mut self, id: TeamId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM teams WHERE id = ?", params![id.as_i64()])?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        info!(team_id = %id, "deleted team");
        Ok(())
    }

    pub fn get_team(&self, id: TeamId) -> Result<Option<Team>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, division_id FROM teams WHERE id = ?",
                params![id.as_i64()],
                row_to_team,
            )
            .optional()?)
    }

    pub fn require_team(&self, id: TeamId) -> Result<Team> {
        self.get_team(id)?.ok_or_else(|| id.not_found().into())
    }

    pub fn find_team(&self, division_id: DivisionId, name: &str) -> Result<Option<Team>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, division_id FROM teams WHERE division_id = ? AND name = ?",
                params![division_id.as_i64(), name.trim()],
                row_to_team,
            )
            .optional()?)
    }

    /// Teams ordered by name, optionally limited to one division
    pub fn list_teams(&self, division_id: Option<DivisionId>) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, division_id FROM teams
             WHERE ?1 IS NULL OR division_id = ?1
             ORDER BY name, id",
        )?;
        let rows = stmt.query_map(params![division_id.map(|d| d.as_i64())], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Team ids of a division in insertion order, the input to fixture generation
    pub fn division_team_ids(&self, division_id: DivisionId) -> Result<Vec<TeamId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM teams WHERE division_id = ? ORDER BY id")?;
        let rows = stmt.query_map(params![division_id.as_i64()], |row| {
            row.get(0).map(TeamId::new)
        })?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    fn count_team_matches(&self, id: TeamId) -> Result<u32> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM matches WHERE team1_id = ?1 OR team2_id = ?1",
            params![id.as_i64()],
            |row| row.get(0),
        )?)
    }

    // ---- players ----

    pub fn create_player(
        &mut self,
        name: &str,
        position: Position,
        team_id: TeamId,
    ) -> Result<PlayerId> {
        let name = clean_name(PlayerId::ENTITY, name)?;
        self.require_team(team_id)?;

        self.conn.execute(
            "INSERT INTO players (name, position, team_id) VALUES (?, ?, ?)",
            params![name, position.to_string(), team_id.as_i64()],
        )?;

        let id = PlayerId::new(self.conn.last_insert_rowid());
        info!(player_id = %id, team_id = %team_id, name = %name, %position, "created player");
        Ok(id)
    }

    /// Change a player's name and/or position; `None` leaves a field as is
    pub fn update_player(
        &mut self,
        id: PlayerId,
        name: Option<&str>,
        position: Option<Position>,
    ) -> Result<()> {
        let name = name
            .map(|n| clean_name(PlayerId::ENTITY, n))
            .transpose()?;
        let changed = self.conn.execute(
            "UPDATE players
             SET name = COALESCE(?, name), position = COALESCE(?, position)
             WHERE id = ?",
            params![name, position.map(|p| p.to_string()), id.as_i64()],
        )?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        Ok(())
    }

    /// Move a player to another team. Their past stat rows stay attached.
    pub fn transfer_player(&mut self, id: PlayerId, team_id: TeamId) -> Result<()> {
        self.require_team(team_id)?;
        let changed = self.conn.execute(
            "UPDATE players SET team_id = ? WHERE id = ?",
            params![team_id.as_i64(), id.as_i64()],
        )?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        info!(player_id = %id, team_id = %team_id, "transferred player");
        Ok(())
    }

    pub fn delete_player(&mut self, id: PlayerId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM players WHERE id = ?", params![id.as_i64()])?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        info!(player_id = %id, "deleted player");
        Ok(())
    }

    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, position, team_id FROM players WHERE id = ?",
                params![id.as_i64()],
                row_to_player,
            )
            .optional()?)
    }

    pub fn require_player(&self, id: PlayerId) -> Result<Player> {
        self.get_player(id)?.ok_or_else(|| id.not_found().into())
    }

    pub fn find_player(&self, team_id: TeamId, name: &str) -> Result<Option<Player>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, position, team_id FROM players
                 WHERE team_id = ? AND name = ?
                 ORDER BY id LIMIT 1",
                params![team_id.as_i64(), name.trim()],
                row_to_player,
            )
            .optional()?)
    }

    /// Players ordered by name, optionally limited to one team
    pub fn list_players(&self, team_id: Option<TeamId>) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, position, team_id FROM players
             WHERE ?1 IS NULL OR team_id = ?1
             ORDER BY name, id",
        )?;
        let rows = stmt.query_map(params![team_id.map(|t| t.as_i64())], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Players whose team belongs to `division_id`, ordered by name
    pub fn list_division_players(&self, division_id: DivisionId) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, p.position, p.team_id
             FROM players p
             JOIN teams t ON p.team_id = t.id
             WHERE t.division_id = ?
             ORDER BY p.name, p.id",
        )?;
        let rows = stmt.query_map(params![division_id.as_i64()], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }
}

pub(crate) fn row_to_division(row: &Row) -> rusqlite::Result<Division> {
    Ok(Division {
        id: DivisionId::new(row.get(0)?),
        name: row.get(1)?,
    })
}

pub(crate) fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        name: row.get(1)?,
        division_id: DivisionId::new(row.get(2)?),
    })
}

pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    let position: String = row.get(2)?;
    let position = position.parse::<Position>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        name: row.get(1)?,
        position,
        team_id: TeamId::new(row.get(3)?),
    })
}
