//! Database schema and connection management

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Tables in dependency order (parents first)
pub const TABLES: [&str; 5] = ["divisions", "teams", "players", "matches", "player_stats"];

/// Handle on the tournament database.
///
/// Owns the single connection for the lifetime of the application; every
/// component that needs storage borrows this handle.
pub struct TournamentDatabase {
    pub(crate) conn: Connection,
}

/// One row of `PRAGMA foreign_key_list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub table: String,
    pub from: String,
    pub to: String,
    pub on_delete: String,
}

impl TournamentDatabase {
    /// Open (creating if needed) the database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("creating database directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        debug!(path = %path.display(), "opened database");
        Self::with_connection(conn)
    }

    /// Create a fresh in-memory database, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        // Cascades only fire with enforcement on, and SQLite defaults it off
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Close the connection, surfacing any error SQLite reports on shutdown
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| anyhow::Error::new(err).context("closing database"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS divisions (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL CHECK (length(trim(name)) > 0),
                division_id INTEGER NOT NULL,
                UNIQUE (division_id, name),
                FOREIGN KEY (division_id) REFERENCES divisions(id) ON DELETE CASCADE
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL CHECK (length(trim(name)) > 0),
                position TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                FOREIGN KEY (team_id) REFERENCES teams(id) ON DELETE CASCADE
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                division_id INTEGER NOT NULL,
                team1_id INTEGER NOT NULL,
                team2_id INTEGER NOT NULL,
                team1_score INTEGER,
                team2_score INTEGER,
                FOREIGN KEY (division_id) REFERENCES divisions(id) ON DELETE CASCADE,
                FOREIGN KEY (team1_id) REFERENCES teams(id) ON DELETE CASCADE,
                FOREIGN KEY (team2_id) REFERENCES teams(id) ON DELETE CASCADE,
                CHECK (team1_id != team2_id),
                CHECK ((team1_score IS NULL) = (team2_score IS NULL)),
                CHECK (team1_score IS NULL OR (team1_score >= 0 AND team2_score >= 0))
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS player_stats (
                id INTEGER PRIMARY KEY,
                player_id INTEGER NOT NULL,
                match_id INTEGER NOT NULL,
                attempts INTEGER NOT NULL DEFAULT 0 CHECK (attempts >= 0),
                goals INTEGER NOT NULL DEFAULT 0 CHECK (goals >= 0),
                center_passes INTEGER NOT NULL DEFAULT 0 CHECK (center_passes >= 0),
                tips INTEGER NOT NULL DEFAULT 0 CHECK (tips >= 0),
                rebounds INTEGER NOT NULL DEFAULT 0 CHECK (rebounds >= 0),
                interceptions INTEGER NOT NULL DEFAULT 0 CHECK (interceptions >= 0),
                turnovers INTEGER NOT NULL DEFAULT 0 CHECK (turnovers >= 0),
                CHECK (goals <= attempts),
                UNIQUE (player_id, match_id),
                FOREIGN KEY (player_id) REFERENCES players(id) ON DELETE CASCADE,
                FOREIGN KEY (match_id) REFERENCES matches(id) ON DELETE CASCADE
            )",
            [],
        )?;

        // Indexes for the aggregation queries
        tx.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_division ON matches(division_id)",
            [],
        )?;
        tx.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_stats_match ON player_stats(match_id)",
            [],
        )?;
        tx.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id)",
            [],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Drop every table, children first
    pub fn drop_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        for table in TABLES.iter().rev() {
            tx.execute(&format!("DROP TABLE IF EXISTS {}", table), [])?;
        }
        tx.commit()?;
        info!("dropped all tables");
        Ok(())
    }

    /// Drop and recreate all tables
    pub fn reset(&mut self) -> Result<()> {
        self.drop_tables()?;
        self.initialize_schema()
    }

    /// Names of all user tables, sorted
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            params![table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Foreign keys declared on `table`
    pub fn foreign_keys(&self, table: &str) -> Result<Vec<ForeignKey>> {
        let mut stmt = self
            .conn
            .prepare("SELECT \"table\", \"from\", \"to\", on_delete FROM pragma_foreign_key_list(?)")?;
        let rows = stmt.query_map(params![table], |row| {
            Ok(ForeignKey {
                table: row.get(0)?,
                from: row.get(1)?,
                to: row.get(2)?,
                on_delete: row.get(3)?,
            })
        })?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }
}
