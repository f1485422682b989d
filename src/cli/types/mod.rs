//! Type-safe wrappers and enums for tournament data.

pub mod filters;
pub mod ids;
pub mod position;
pub mod stat_entry;

pub use filters::{FixturePolicy, LeaderboardSort};
pub use ids::{DivisionId, MatchId, PlayerId, TeamId};
pub use position::Position;
pub use stat_entry::StatEntry;
