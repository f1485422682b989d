//! Netball court positions.

use crate::error::NetballError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven netball positions.
///
/// Parsed case-insensitively from either the bib abbreviation or the full
/// name, and always displayed (and stored) as the abbreviation.
///
/// # Examples
///
/// ```rust
/// use netball_stats::Position;
///
/// let gs: Position = "Goal Shooter".parse().unwrap();
/// assert_eq!(gs, Position::GS);
/// assert_eq!(gs.to_string(), "GS");
/// assert_eq!("wd".parse::<Position>().unwrap(), Position::WD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    GS,
    GA,
    WA,
    C,
    WD,
    GD,
    GK,
}

impl Position {
    pub const ALL: [Position; 7] = [
        Position::GS,
        Position::GA,
        Position::WA,
        Position::C,
        Position::WD,
        Position::GD,
        Position::GK,
    ];

    /// Full position name as printed on team sheets.
    pub fn full_name(&self) -> &'static str {
        match self {
            Position::GS => "Goal Shooter",
            Position::GA => "Goal Attack",
            Position::WA => "Wing Attack",
            Position::C => "Centre",
            Position::WD => "Wing Defence",
            Position::GD => "Goal Defence",
            Position::GK => "Goal Keeper",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::GS => "GS",
            Position::GA => "GA",
            Position::WA => "WA",
            Position::C => "C",
            Position::WD => "WD",
            Position::GD => "GD",
            Position::GK => "GK",
        };
        f.pad(s)
    }
}

impl FromStr for Position {
    type Err = NetballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "GS" | "GOAL SHOOTER" => Ok(Position::GS),
            "GA" | "GOAL ATTACK" => Ok(Position::GA),
            "WA" | "WING ATTACK" => Ok(Position::WA),
            "C" | "CENTRE" | "CENTER" => Ok(Position::C),
            "WD" | "WING DEFENCE" | "WING DEFENSE" => Ok(Position::WD),
            "GD" | "GOAL DEFENCE" | "GOAL DEFENSE" => Ok(Position::GD),
            "GK" | "GOAL KEEPER" | "GOALKEEPER" => Ok(Position::GK),
            _ => Err(NetballError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
