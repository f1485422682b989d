//! CSV import and export commands

use crate::{
    interchange::{export_all, import_roster_file},
    storage::TournamentDatabase,
    Result,
};
use std::path::Path;

/// Handle the import command
pub fn handle_import(db: &mut TournamentDatabase, file: &Path) -> Result<()> {
    let summary = import_roster_file(db, file)?;
    println!(
        "✓ Imported {}: {} divisions, {} teams, {} players created ({} already present)",
        file.display(),
        summary.divisions_created,
        summary.teams_created,
        summary.players_created,
        summary.players_skipped
    );
    Ok(())
}

/// Handle the export command
pub fn handle_export(db: &TournamentDatabase, dir: &Path) -> Result<()> {
    let summary = export_all(db, dir)?;
    for (path, rows) in &summary.files {
        println!("✓ {} ({} rows)", path.display(), rows);
    }
    Ok(())
}
