//! ID types for tournament entities.
//!
//! Every entity is keyed by its SQLite rowid. The wrappers keep a team id
//! from being passed where a player id is expected.

use crate::error::{NetballError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }

            /// Entity name used in error messages.
            pub const ENTITY: &'static str = $entity;

            /// Build the `NotFound` error for this id.
            pub fn not_found(&self) -> NetballError {
                NetballError::NotFound {
                    entity: Self::ENTITY,
                    id: self.0,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = NetballError;

            fn from_str(s: &str) -> Result<Self> {
                s.trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|id| *id > 0)
                    .map(Self)
                    .ok_or_else(|| NetballError::InvalidId {
                        entity: $entity,
                        value: s.to_string(),
                    })
            }
        }
    };
}

entity_id!(
    /// Type-safe wrapper for division IDs.
    ///
    /// ```rust
    /// use netball_stats::DivisionId;
    ///
    /// let id: DivisionId = "3".parse().unwrap();
    /// assert_eq!(id, DivisionId::new(3));
    /// assert_eq!(id.to_string(), "3");
    /// ```
    DivisionId,
    "Division"
);

entity_id!(
    /// Type-safe wrapper for team IDs
    TeamId,
    "Team"
);

entity_id!(
    /// Type-safe wrapper for player IDs
    PlayerId,
    "Player"
);

entity_id!(
    /// Type-safe wrapper for match IDs
    MatchId,
    "Match"
);
