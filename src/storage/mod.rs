//! Storage layer for tournament data
//!
//! A thin abstraction over the SQLite database:
//! - `models`: Typed records for every relation
//! - `schema`: Connection lifecycle and schema management
//! - `queries`: Division, team and player CRUD
//! - `matches`: Fixtures, results and player stat rows
//! - `roster`: Transactional bulk roster import
//! - `sample`: Demo data for trying the tool out

pub mod matches;
pub mod models;
pub mod queries;
pub mod roster;
pub mod sample;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::{ForeignKey, TournamentDatabase, TABLES};
