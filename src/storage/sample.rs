//! Sample tournament used by `init --sample`

use super::{models::*, schema::TournamentDatabase};
use crate::cli::types::Position;
use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

/// What `seed_sample_data` inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleSummary {
    pub divisions: usize,
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
}

impl TournamentDatabase {
    /// Insert two divisions of two teams each, with one completed match per
    /// division. Intended for an empty database.
    pub fn seed_sample_data(&mut self) -> Result<SampleSummary> {
        let mut summary = SampleSummary::default();

        let rosters: [(&str, [(&str, [(&str, Position); 2]); 2]); 2] = [
            (
                "Premier Division",
                [
                    (
                        "Red Dragons",
                        [("Alice Johnson", Position::GS), ("Bella Smith", Position::GA)],
                    ),
                    (
                        "Blue Eagles",
                        [("Chloe Brown", Position::WA), ("Dana Prince", Position::C)],
                    ),
                ],
            ),
            (
                "Division 1",
                [
                    (
                        "Green Lions",
                        [("Eve Wilson", Position::GS), ("Fran Miller", Position::GD)],
                    ),
                    (
                        "Yellow Tigers",
                        [("Gina Lopez", Position::GA), ("Hana Ito", Position::GK)],
                    ),
                ],
            ),
        ];
        let results = [
            ((2024, 1, 15), MatchScore { team1: 45, team2: 42 }, [(15, 12), (10, 8)]),
            ((2024, 1, 22), MatchScore { team1: 38, team2: 35 }, [(14, 11), (0, 0)]),
        ];

        for ((division_name, teams), ((y, m, d), score, shooting)) in rosters.iter().zip(results) {
            let division_id = self.create_division(division_name)?;
            summary.divisions += 1;

            let mut team_ids = Vec::new();
            let mut home_players = Vec::new();
            for (team_name, players) in teams {
                let team_id = self.create_team(team_name, division_id)?;
                summary.teams += 1;
                team_ids.push(team_id);
                for (player_name, position) in players {
                    let player_id = self.create_player(player_name, *position, team_id)?;
                    summary.players += 1;
                    if team_ids.len() == 1 {
                        home_players.push(player_id);
                    }
                }
            }

            let date = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| anyhow::anyhow!("invalid sample date {}-{}-{}", y, m, d))?;
            let match_id = self.create_match(division_id, team_ids[0], team_ids[1], date)?;
            let stats: Vec<NewPlayerStat> = home_players
                .iter()
                .zip(shooting)
                .map(|(player_id, (attempts, goals))| NewPlayerStat {
                    player_id: *player_id,
                    line: StatLine {
                        attempts,
                        goals,
                        turnovers: 1,
                        ..StatLine::default()
                    },
                })
                .collect();
            self.record_result(match_id, score, &stats)?;
            summary.matches += 1;
        }

        info!(?summary, "seeded sample data");
        Ok(summary)
    }
}
