//! Selector enums shared by CLI commands and the aggregation layer.

use std::fmt;

/// Column a player leaderboard is ranked by.
///
/// Every column ranks highest first, except turnovers where fewer is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LeaderboardSort {
    /// Goals scored
    #[default]
    Goals,
    /// Shooting accuracy (players without attempts rank last)
    Accuracy,
    /// Shots at goal
    Attempts,
    /// Centre passes received
    CenterPasses,
    Tips,
    Rebounds,
    Interceptions,
    /// Turnovers conceded (fewest first)
    Turnovers,
}

impl fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaderboardSort::Goals => "Goals",
            LeaderboardSort::Accuracy => "Accuracy",
            LeaderboardSort::Attempts => "Attempts",
            LeaderboardSort::CenterPasses => "Centre Passes",
            LeaderboardSort::Tips => "Tips",
            LeaderboardSort::Rebounds => "Rebounds",
            LeaderboardSort::Interceptions => "Interceptions",
            LeaderboardSort::Turnovers => "Turnovers",
        };
        write!(f, "{}", s)
    }
}

/// What fixture generation does when a division already has matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FixturePolicy {
    /// Refuse, leaving existing matches alone
    #[default]
    Reject,
    /// Delete the division's matches (and their stats) and start over
    Regenerate,
}
