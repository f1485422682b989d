//! Parsing of `--stat` arguments for result entry.

use crate::error::NetballError;
use crate::storage::{NewPlayerStat, StatLine};
use std::str::FromStr;

use super::PlayerId;

/// One player's stat line given on the command line.
///
/// Format: `PLAYER_ID=attempts,goals,center_passes,tips,rebounds,interceptions,turnovers`.
/// Trailing counters may be omitted and default to zero, so `12=10,8` records
/// ten attempts and eight goals for player 12.
///
/// ```rust
/// use netball_stats::cli::types::StatEntry;
///
/// let entry: StatEntry = "12=10,8,0,1".parse().unwrap();
/// assert_eq!(entry.0.line.goals, 8);
/// assert_eq!(entry.0.line.tips, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatEntry(pub NewPlayerStat);

impl FromStr for StatEntry {
    type Err = NetballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| NetballError::InvalidStatLine {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (player, counters) = s
            .split_once('=')
            .ok_or_else(|| invalid("expected PLAYER_ID=counters"))?;
        let player_id: PlayerId = player.parse()?;

        let values = counters
            .split(',')
            .map(|v| v.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid("counters must be non-negative integers"))?;
        if values.is_empty() || values.len() > 7 {
            return Err(invalid("expected between 1 and 7 counters"));
        }

        let mut padded = [0u32; 7];
        padded[..values.len()].copy_from_slice(&values);
        let [attempts, goals, center_passes, tips, rebounds, interceptions, turnovers] = padded;

        Ok(StatEntry(NewPlayerStat {
            player_id,
            line: StatLine {
                attempts,
                goals,
                center_passes,
                tips,
                rebounds,
                interceptions,
                turnovers,
            },
        }))
    }
}

impl From<StatEntry> for NewPlayerStat {
    fn from(entry: StatEntry) -> Self {
        entry.0
    }
}
