//! CSV import and export.
//!
//! Import reads a roster (`Team,Division,Player,Position`) and is
//! all-or-nothing. Export writes one file per entity class plus the
//! computed standings and player totals.

pub mod export;
pub mod import;


pub use export::{export_all, ExportSummary};
pub use import::{import_roster, import_roster_file, parse_roster, REQUIRED_HEADERS};
