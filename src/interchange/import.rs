//! Roster import

use crate::{
    cli::types::Position,
    error::{NetballError, RowError},
    storage::{ImportSummary, RosterRow, TournamentDatabase},
    Result,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub const REQUIRED_HEADERS: [&str; 4] = ["Team", "Division", "Player", "Position"];

/// Column positions of the required headers in a particular file
struct Columns([usize; 4]);

impl Columns {
    fn locate(headers: &StringRecord) -> std::result::Result<Self, Vec<&'static str>> {
        let mut found = [0usize; 4];
        let mut missing = Vec::new();
        for (slot, name) in REQUIRED_HEADERS.iter().enumerate() {
            match headers.iter().position(|h| h.eq_ignore_ascii_case(name)) {
                Some(index) => found[slot] = index,
                None => missing.push(*name),
            }
        }
        if missing.is_empty() {
            Ok(Columns(found))
        } else {
            Err(missing)
        }
    }

    fn row(&self, record: &StringRecord) -> std::result::Result<RosterRow, String> {
        let field = |slot: usize| -> std::result::Result<String, String> {
            let value = record.get(self.0[slot]).unwrap_or("").trim();
            if value.is_empty() {
                Err(format!("missing {}", REQUIRED_HEADERS[slot]))
            } else {
                Ok(value.to_string())
            }
        };

        let team = field(0)?;
        let division = field(1)?;
        let player = field(2)?;
        let position = field(3)?
            .parse::<Position>()
            .map_err(|e| e.to_string())?;

        Ok(RosterRow {
            team,
            division,
            player,
            position,
        })
    }
}

/// Parse and validate a roster without touching the database.
///
/// Every row is checked; if any fail, all failures are returned together in
/// `ImportRejected`.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<RosterRow>> {
    let mut csv = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let columns = Columns::locate(&headers).map_err(|missing| NetballError::ImportRejected {
        errors: vec![RowError {
            line: 1,
            message: format!("missing required header(s): {}", missing.join(", ")),
        }],
    })?;

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for result in csv.records() {
        match result {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                if record.iter().all(|f| f.is_empty()) {
                    continue;
                }
                match columns.row(&record) {
                    Ok(row) => rows.push(row),
                    Err(message) => errors.push(RowError { line, message }),
                }
            }
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or(0);
                errors.push(RowError {
                    line,
                    message: err.to_string(),
                });
            }
        }
    }

    if !errors.is_empty() {
        warn!(rejected = errors.len(), "roster import rejected");
        return Err(NetballError::ImportRejected { errors });
    }
    Ok(rows)
}

/// Validate a roster and apply it in one transaction
pub fn import_roster<R: Read>(db: &mut TournamentDatabase, reader: R) -> Result<ImportSummary> {
    let rows = parse_roster(reader)?;
    let summary = db.apply_roster(&rows)?;
    info!(rows = rows.len(), ?summary, "imported roster");
    Ok(summary)
}

pub fn import_roster_file(db: &mut TournamentDatabase, path: &Path) -> Result<ImportSummary> {
    let file = std::fs::File::open(path)?;
    import_roster(db, file)
}
