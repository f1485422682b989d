//! Match, result and player stat operations

use super::{models::*, schema::TournamentDatabase};
use crate::cli::types::{DivisionId, MatchId, PlayerId, TeamId};
use crate::error::NetballError;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row, Transaction};
use std::collections::HashSet;
use tracing::{debug, info};

const MATCH_COLUMNS: &str =
    "m.id, m.date, m.division_id, m.team1_id, m.team2_id, m.team1_score, m.team2_score";

const STAT_COLUMNS: &str = "s.id, s.player_id, s.match_id, s.attempts, s.goals, \
     s.center_passes, s.tips, s.rebounds, s.interceptions, s.turnovers";

impl TournamentDatabase {
    /// Schedule a single match by hand.
    ///
    /// Both teams must belong to the division, be distinct, and not already
    /// be paired there.
    pub fn create_match(
        &mut self,
        division_id: DivisionId,
        team1_id: TeamId,
        team2_id: TeamId,
        date: NaiveDate,
    ) -> Result<MatchId> {
        self.require_division(division_id)?;
        if team1_id == team2_id {
            return Err(NetballError::SameTeam {
                team_id: team1_id.as_i64(),
            }
            .into());
        }
        for team_id in [team1_id, team2_id] {
            let team = self.require_team(team_id)?;
            if team.division_id != division_id {
                return Err(NetballError::TeamNotInDivision {
                    team_id: team_id.as_i64(),
                    division_id: division_id.as_i64(),
                }
                .into());
            }
        }

        let paired: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM matches
             WHERE division_id = ?1
               AND ((team1_id = ?2 AND team2_id = ?3) OR (team1_id = ?3 AND team2_id = ?2))",
            params![division_id.as_i64(), team1_id.as_i64(), team2_id.as_i64()],
            |row| row.get(0),
        )?;
        if paired > 0 {
            return Err(NetballError::DuplicatePairing {
                division_id: division_id.as_i64(),
                team1_id: team1_id.as_i64(),
                team2_id: team2_id.as_i64(),
            }
            .into());
        }

        let id = insert_fixture(&self.conn, division_id, team1_id, team2_id, date)?;
        info!(match_id = %id, division_id = %division_id, "scheduled match");
        Ok(id)
    }

    pub fn reschedule_match(&mut self, id: MatchId, date: NaiveDate) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE matches SET date = ? WHERE id = ?",
            params![date, id.as_i64()],
        )?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        Ok(())
    }

    /// Delete a match and its stat rows
    pub fn delete_match(&mut self, id: MatchId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM matches WHERE id = ?", params![id.as_i64()])?;
        if changed == 0 {
            return Err(id.not_found().into());
        }
        info!(match_id = %id, "deleted match");
        Ok(())
    }

    pub fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {} FROM matches m WHERE m.id = ?", MATCH_COLUMNS),
                params![id.as_i64()],
                row_to_match,
            )
            .optional()?)
    }

    pub fn require_match(&self, id: MatchId) -> Result<Match> {
        self.get_match(id)?.ok_or_else(|| id.not_found().into())
    }

    /// Matches ordered by date then id, optionally limited to one division
    pub fn list_matches(&self, division_id: Option<DivisionId>) -> Result<Vec<Match>> {
        self.query_matches(
            &format!(
                "SELECT {} FROM matches m
                 WHERE ?1 IS NULL OR m.division_id = ?1
                 ORDER BY m.date, m.id",
                MATCH_COLUMNS
            ),
            division_id,
        )
    }

    /// Matches of a division that have a recorded score
    pub fn completed_matches(&self, division_id: DivisionId) -> Result<Vec<Match>> {
        self.query_matches(
            &format!(
                "SELECT {} FROM matches m
                 WHERE m.division_id = ?1
                   AND m.team1_score IS NOT NULL AND m.team2_score IS NOT NULL
                 ORDER BY m.date, m.id",
                MATCH_COLUMNS
            ),
            Some(division_id),
        )
    }

    fn query_matches(&self, sql: &str, division_id: Option<DivisionId>) -> Result<Vec<Match>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![division_id.map(|d| d.as_i64())], row_to_match)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    pub fn count_matches(&self, division_id: DivisionId) -> Result<u32> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM matches WHERE division_id = ?",
            params![division_id.as_i64()],
            |row| row.get(0),
        )?)
    }

    /// Record the final score and player stats of an unplayed match.
    ///
    /// Everything is validated before the first write and applied in one
    /// transaction, so a rejected result leaves the match untouched.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        score: MatchScore,
        stats: &[NewPlayerStat],
    ) -> Result<()> {
        let fixture = self.require_match(match_id)?;
        if fixture.is_played() {
            return Err(NetballError::ResultAlreadyRecorded {
                match_id: match_id.as_i64(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for stat in stats {
            if !seen.insert(stat.player_id) {
                return Err(NetballError::DuplicatePlayerStat {
                    player_id: stat.player_id.as_i64(),
                    match_id: match_id.as_i64(),
                }
                .into());
            }
            if stat.line.goals > stat.line.attempts {
                return Err(NetballError::GoalsExceedAttempts {
                    player_id: stat.player_id.as_i64(),
                    goals: stat.line.goals,
                    attempts: stat.line.attempts,
                }
                .into());
            }
            let player = self.require_player(stat.player_id)?;
            if !fixture.involves(player.team_id) {
                return Err(NetballError::PlayerNotInMatch {
                    player_id: stat.player_id.as_i64(),
                    match_id: match_id.as_i64(),
                }
                .into());
            }
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            "UPDATE matches SET team1_score = ?, team2_score = ? WHERE id = ?",
            params![score.team1, score.team2, match_id.as_i64()],
        )?;
        for stat in stats {
            insert_player_stat(&tx, match_id, stat)?;
        }
        tx.commit()?;

        info!(
            match_id = %match_id,
            team1_score = score.team1,
            team2_score = score.team2,
            stat_lines = stats.len(),
            "recorded result"
        );
        Ok(())
    }

    /// Turn a completed match back into a fixture, discarding its stats
    pub fn clear_result(&mut self, match_id: MatchId) -> Result<()> {
        self.require_match(match_id)?;

        let tx = self.conn.transaction()?;
        let removed = tx.execute(
            "DELETE FROM player_stats WHERE match_id = ?",
            params![match_id.as_i64()],
        )?;
        tx.execute(
            "UPDATE matches SET team1_score = NULL, team2_score = NULL WHERE id = ?",
            params![match_id.as_i64()],
        )?;
        tx.commit()?;

        info!(match_id = %match_id, removed_stats = removed, "cleared result");
        Ok(())
    }

    /// Stat rows recorded for one match
    pub fn match_player_stats(&self, match_id: MatchId) -> Result<Vec<PlayerStat>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM player_stats s WHERE s.match_id = ? ORDER BY s.player_id",
            STAT_COLUMNS
        ))?;
        let rows = stmt.query_map(params![match_id.as_i64()], row_to_player_stat)?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    /// Stat rows matching `filter`, optionally for a single player
    pub fn player_stat_rows(
        &self,
        player_id: Option<PlayerId>,
        filter: &StatFilter,
    ) -> Result<Vec<PlayerStat>> {
        let sql = format!(
            "SELECT {} FROM player_stats s
             JOIN matches m ON s.match_id = m.id
             WHERE (?1 IS NULL OR s.player_id = ?1)
               AND (?2 IS NULL OR m.division_id = ?2)
               AND (?3 IS NULL OR m.date >= ?3)
               AND (?4 IS NULL OR m.date <= ?4)
             ORDER BY m.date, s.match_id, s.player_id",
            STAT_COLUMNS
        );
        debug!(?player_id, ?filter, "loading player stat rows");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![
                player_id.map(|p| p.as_i64()),
                filter.division_id.map(|d| d.as_i64()),
                filter.from,
                filter.to
            ],
            row_to_player_stat,
        )?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }
}

pub(crate) fn insert_fixture(
    conn: &rusqlite::Connection,
    division_id: DivisionId,
    team1_id: TeamId,
    team2_id: TeamId,
    date: NaiveDate,
) -> Result<MatchId> {
    conn.execute(
        "INSERT INTO matches (date, division_id, team1_id, team2_id, team1_score, team2_score)
         VALUES (?, ?, ?, ?, NULL, NULL)",
        params![date, division_id.as_i64(), team1_id.as_i64(), team2_id.as_i64()],
    )?;
    Ok(MatchId::new(conn.last_insert_rowid()))
}

fn insert_player_stat(tx: &Transaction, match_id: MatchId, stat: &NewPlayerStat) -> Result<()> {
    let line = &stat.line;
    tx.execute(
        "INSERT INTO player_stats
         (player_id, match_id, attempts, goals, center_passes, tips, rebounds, interceptions, turnovers)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            stat.player_id.as_i64(),
            match_id.as_i64(),
            line.attempts,
            line.goals,
            line.center_passes,
            line.tips,
            line.rebounds,
            line.interceptions,
            line.turnovers
        ],
    )?;
    Ok(())
}

pub(crate) fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: MatchId::new(row.get(0)?),
        date: row.get(1)?,
        division_id: DivisionId::new(row.get(2)?),
        team1_id: TeamId::new(row.get(3)?),
        team2_id: TeamId::new(row.get(4)?),
        team1_score: row.get(5)?,
        team2_score: row.get(6)?,
    })
}

pub(crate) fn row_to_player_stat(row: &Row) -> rusqlite::Result<PlayerStat> {
    Ok(PlayerStat {
        id: row.get(0)?,
        player_id: PlayerId::new(row.get(1)?),
        match_id: MatchId::new(row.get(2)?),
        line: StatLine {
            attempts: row.get(3)?,
            goals: row.get(4)?,
            center_passes: row.get(5)?,
            tips: row.get(6)?,
            rebounds: row.get(7)?,
            interceptions: row.get(8)?,
            turnovers: row.get(9)?,
        },
    })
}
