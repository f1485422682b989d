//! Plain-text report tables rendered from computed statistics.

use crate::stats::{LeaderboardEntry, Standing};


/// Accuracy as a percentage, or `-` when not applicable
pub fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(a) => format!("{:.1}%", a * 100.0),
        None => "-".to_string(),
    }
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Width of the name column: longest name, but never narrower than the header
fn name_width<'a>(header: &str, names: impl Iterator<Item = &'a str>) -> usize {
    names
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// Title, header and dash rule shared by every table
fn table_head(title: &str, header: String) -> String {
    format!("{}\n{}\n{}\n", title, header, "-".repeat(header.len()))
}

/// Standings table for one division
pub fn render_standings(division_name: &str, table: &[Standing]) -> String {
    let width = name_width("Team", table.iter().map(|s| s.team_name.as_str()));
    let mut out = table_head(
        &format!("{} standings", division_name),
        format!(
            "{:>3}  {:<width$}  {:>2} {:>2} {:>2} {:>2} {:>4} {:>4} {:>5} {:>4}",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts",
            width = width
        ),
    );

    if table.is_empty() {
        out.push_str("(no teams)\n");
    }
    for s in table {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:>2} {:>2} {:>2} {:>2} {:>4} {:>4} {:>5} {:>4}\n",
            s.rank,
            s.team_name,
            s.games_played,
            s.wins,
            s.draws,
            s.losses,
            s.goals_for,
            s.goals_against,
            signed(s.goal_difference),
            s.points,
            width = width
        ));
    }
    out
}

/// Player leaderboard table
pub fn render_leaderboard(title: &str, entries: &[LeaderboardEntry]) -> String {
    let width = name_width("Player", entries.iter().map(|e| e.player_name.as_str()));
    let mut out = table_head(
        title,
        format!(
            "{:>3}  {:<width$}  {:<3} {:>2} {:>4} {:>4} {:>7} {:>4} {:>4} {:>4} {:>4} {:>4}",
            "#", "Player", "Pos", "GP", "Att", "G", "Acc", "CP", "Tip", "Reb", "Int", "TO",
            width = width
        ),
    );

    if entries.is_empty() {
        out.push_str("(no players)\n");
    }
    for e in entries {
        let t = &e.stats.totals;
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:<3} {:>2} {:>4} {:>4} {:>7} {:>4} {:>4} {:>4} {:>4} {:>4}\n",
            e.rank,
            e.player_name,
            e.position.to_string(),
            e.stats.games_played,
            t.attempts,
            t.goals,
            format_accuracy(e.stats.accuracy),
            t.center_passes,
            t.tips,
            t.rebounds,
            t.interceptions,
            t.turnovers,
            width = width
        ));
    }
    out
}
