//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{DivisionId, MatchId, PlayerId, Position, TeamId};
use crate::error::NetballError;
use chrono::NaiveDate;

fn create_test_db() -> TournamentDatabase {
    TournamentDatabase::new_in_memory().unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
}

/// Division with two teams and one player on each
fn create_test_db_with_fixture() -> (TournamentDatabase, MatchId, PlayerId, PlayerId) {
    let mut db = create_test_db();
    let division = db.create_division("Premier").unwrap();
    let home = db.create_team("Red Dragons", division).unwrap();
    let away = db.create_team("Blue Eagles", division).unwrap();
    let shooter = db.create_player("Alice", Position::GS, home).unwrap();
    let keeper = db.create_player("Beth", Position::GK, away).unwrap();
    let match_id = db.create_match(division, home, away, date(1)).unwrap();
    (db, match_id, shooter, keeper)
}

fn netball_err(err: anyhow::Error) -> NetballError {
    NetballError::from(err)
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert_eq!(
        db.table_names().unwrap(),
        vec!["divisions", "matches", "player_stats", "players", "teams"]
    );
    for table in TABLES {
        assert!(db.table_exists(table).unwrap());
    }
    assert!(!db.table_exists("nonexistent").unwrap());
}

#[test]
fn test_foreign_keys_cascade() {
    let db = create_test_db();

    let keys = db.foreign_keys("player_stats").unwrap();
    assert_eq!(keys.len(), 2);
    assert!(keys.iter().all(|k| k.on_delete == "CASCADE"));
    assert!(keys.iter().any(|k| k.table == "players" && k.from == "player_id"));
    assert!(keys.iter().any(|k| k.table == "matches" && k.from == "match_id"));

    let keys = db.foreign_keys("matches").unwrap();
    assert_eq!(keys.len(), 3);
}

#[test]
fn test_drop_and_reset() {
    let mut db = create_test_db();
    db.create_division("Premier").unwrap();

    db.drop_tables().unwrap();
    assert!(db.table_names().unwrap().is_empty());

    db.reset().unwrap();
    assert_eq!(db.table_names().unwrap().len(), 5);
    assert!(db.list_divisions().unwrap().is_empty());
}

#[test]
fn test_division_crud() {
    let mut db = create_test_db();
    let id = db.create_division("  Premier  ").unwrap();

    let division = db.get_division(id).unwrap().unwrap();
    assert_eq!(division.name, "Premier");

    db.rename_division(id, "Championship").unwrap();
    assert_eq!(db.require_division(id).unwrap().name, "Championship");
    assert!(db.find_division_by_name("Championship").unwrap().is_some());

    db.delete_division(id).unwrap();
    assert!(db.get_division(id).unwrap().is_none());
}

#[test]
fn test_division_name_rules() {
    let mut db = create_test_db();
    db.create_division("Premier").unwrap();

    match netball_err(db.create_division("Premier").unwrap_err()) {
        NetballError::DuplicateName { entity, name } => {
            assert_eq!(entity, "Division");
            assert_eq!(name, "Premier");
        }
        other => panic!("Expected DuplicateName, got {:?}", other),
    }
    assert!(matches!(
        netball_err(db.create_division("   ").unwrap_err()),
        NetballError::EmptyName { .. }
    ));
}

#[test]
fn test_missing_ids_are_not_found() {
    let mut db = create_test_db();
    assert!(matches!(
        netball_err(db.delete_division(DivisionId::new(5)).unwrap_err()),
        NetballError::NotFound { entity: "Division", id: 5 }
    ));
    assert!(matches!(
        netball_err(db.create_team("Orphans", DivisionId::new(5)).unwrap_err()),
        NetballError::NotFound { entity: "Division", .. }
    ));
    assert!(matches!(
        netball_err(db.rename_team(TeamId::new(3), "X").unwrap_err()),
        NetballError::NotFound { entity: "Team", .. }
    ));
    assert!(matches!(
        netball_err(db.delete_player(PlayerId::new(3)).unwrap_err()),
        NetballError::NotFound { entity: "Player", .. }
    ));
}

#[test]
fn test_team_names_unique_within_division_only() {
    let mut db = create_test_db();
    let premier = db.create_division("Premier").unwrap();
    let second = db.create_division("Division 2").unwrap();

    db.create_team("Hawks", premier).unwrap();
    db.create_team("Hawks", second).unwrap();
    assert!(matches!(
        netball_err(db.create_team("Hawks", premier).unwrap_err()),
        NetballError::DuplicateName { entity: "Team", .. }
    ));
}

#[test]
fn test_list_teams_ordered_and_filtered() {
    let mut db = create_test_db();
    let premier = db.create_division("Premier").unwrap();
    let second = db.create_division("Division 2").unwrap();
    db.create_team("Zebras", premier).unwrap();
    db.create_team("Ants", premier).unwrap();
    db.create_team("Moths", second).unwrap();

    let names: Vec<String> = db
        .list_teams(Some(premier))
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Ants", "Zebras"]);
    assert_eq!(db.list_teams(None).unwrap().len(), 3);
}

#[test]
fn test_move_team_only_without_matches() {
    let (mut db, match_id, _, _) = create_test_db_with_fixture();
    let m = db.require_match(match_id).unwrap();
    let other = db.create_division("Division 2").unwrap();

    assert!(matches!(
        netball_err(db.move_team(m.team1_id, other).unwrap_err()),
        NetballError::TeamHasMatches { count: 1, .. }
    ));

    db.delete_match(match_id).unwrap();
    db.move_team(m.team1_id, other).unwrap();
    assert_eq!(db.require_team(m.team1_id).unwrap().division_id, other);
}

#[test]
fn test_player_crud() {
    let mut db = create_test_db();
    let division = db.create_division("Premier").unwrap();
    let team = db.create_team("Hawks", division).unwrap();
    let other = db.create_team("Owls", division).unwrap();

    let id = db.create_player("Cara", Position::C, team).unwrap();
    let player = db.require_player(id).unwrap();
    assert_eq!(player.position, Position::C);
    assert_eq!(player.team_id, team);

    db.update_player(id, None, Some(Position::WA)).unwrap();
    let player = db.require_player(id).unwrap();
    assert_eq!(player.name, "Cara");
    assert_eq!(player.position, Position::WA);

    db.update_player(id, Some("Cara Jones"), None).unwrap();
    assert_eq!(db.require_player(id).unwrap().name, "Cara Jones");

    db.transfer_player(id, other).unwrap();
    assert_eq!(db.list_players(Some(other)).unwrap().len(), 1);
    assert!(db.list_players(Some(team)).unwrap().is_empty());
    assert_eq!(db.list_division_players(division).unwrap().len(), 1);

    db.delete_player(id).unwrap();
    assert!(db.get_player(id).unwrap().is_none());
}

#[test]
fn test_create_match_validation() {
    let (mut db, match_id, _, _) = create_test_db_with_fixture();
    let m = db.require_match(match_id).unwrap();

    assert!(matches!(
        netball_err(db.create_match(m.division_id, m.team1_id, m.team1_id, date(2)).unwrap_err()),
        NetballError::SameTeam { .. }
    ));
    // Reversed order is still the same pairing
    assert!(matches!(
        netball_err(db.create_match(m.division_id, m.team2_id, m.team1_id, date(2)).unwrap_err()),
        NetballError::DuplicatePairing { .. }
    ));

    let other = db.create_division("Division 2").unwrap();
    let outsider = db.create_team("Outsiders", other).unwrap();
    assert!(matches!(
        netball_err(db.create_match(m.division_id, m.team1_id, outsider, date(2)).unwrap_err()),
        NetballError::TeamNotInDivision { .. }
    ));
    assert_eq!(db.count_matches(m.division_id).unwrap(), 1);
}

#[test]
fn test_record_result_and_stats() {
    let (mut db, match_id, shooter, keeper) = create_test_db_with_fixture();
    let stats = [
        NewPlayerStat {
            player_id: shooter,
            line: StatLine {
                attempts: 20,
                goals: 15,
                center_passes: 4,
                ..StatLine::default()
            },
        },
        NewPlayerStat {
            player_id: keeper,
            line: StatLine {
                interceptions: 3,
                rebounds: 2,
                ..StatLine::default()
            },
        },
    ];

    db.record_result(match_id, MatchScore { team1: 15, team2: 10 }, &stats)
        .unwrap();

    let m = db.require_match(match_id).unwrap();
    assert_eq!(m.score(), Some(MatchScore { team1: 15, team2: 10 }));
    let rows = db.match_player_stats(match_id).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line.goals, 15);
    assert_eq!(rows[1].line.interceptions, 3);
    assert_eq!(db.completed_matches(m.division_id).unwrap().len(), 1);
}

#[test]
fn test_record_result_rejects_and_writes_nothing() {
    let (mut db, match_id, shooter, _) = create_test_db_with_fixture();
    let bad = [NewPlayerStat {
        player_id: shooter,
        line: StatLine {
            attempts: 5,
            goals: 6,
            ..StatLine::default()
        },
    }];

    let err = db
        .record_result(match_id, MatchScore { team1: 1, team2: 0 }, &bad)
        .unwrap_err();
    assert!(matches!(
        netball_err(err),
        NetballError::GoalsExceedAttempts { goals: 6, attempts: 5, .. }
    ));
    assert!(!db.require_match(match_id).unwrap().is_played());
    assert!(db.match_player_stats(match_id).unwrap().is_empty());
}

#[test]
fn test_record_result_player_checks() {
    let (mut db, match_id, shooter, _) = create_test_db_with_fixture();
    let m = db.require_match(match_id).unwrap();
    let other = db.create_division("Division 2").unwrap();
    let team = db.create_team("Strangers", other).unwrap();
    let stranger = db.create_player("Zoe", Position::GA, team).unwrap();
    let score = MatchScore { team1: 3, team2: 2 };

    let err = db
        .record_result(
            match_id,
            score,
            &[NewPlayerStat {
                player_id: stranger,
                line: StatLine::default(),
            }],
        )
        .unwrap_err();
    assert!(matches!(netball_err(err), NetballError::PlayerNotInMatch { .. }));

    let line = NewPlayerStat {
        player_id: shooter,
        line: StatLine::default(),
    };
    let err = db.record_result(match_id, score, &[line, line]).unwrap_err();
    assert!(matches!(netball_err(err), NetballError::DuplicatePlayerStat { .. }));

    assert!(db.completed_matches(m.division_id).unwrap().is_empty());
}

#[test]
fn test_result_recorded_once_then_cleared() {
    let (mut db, match_id, shooter, _) = create_test_db_with_fixture();
    let line = NewPlayerStat {
        player_id: shooter,
        line: StatLine {
            attempts: 3,
            goals: 2,
            ..StatLine::default()
        },
    };
    db.record_result(match_id, MatchScore { team1: 2, team2: 2 }, &[line])
        .unwrap();

    let err = db
        .record_result(match_id, MatchScore { team1: 9, team2: 9 }, &[])
        .unwrap_err();
    assert!(matches!(
        netball_err(err),
        NetballError::ResultAlreadyRecorded { .. }
    ));

    db.clear_result(match_id).unwrap();
    let m = db.require_match(match_id).unwrap();
    assert_eq!((m.team1_score, m.team2_score), (None, None));
    assert!(db.match_player_stats(match_id).unwrap().is_empty());

    db.record_result(match_id, MatchScore { team1: 9, team2: 9 }, &[line])
        .unwrap();
    assert!(db.require_match(match_id).unwrap().is_played());
}

#[test]
fn test_reschedule_and_list_order() {
    let (mut db, first, _, _) = create_test_db_with_fixture();
    let m = db.require_match(first).unwrap();
    let third = db.create_team("Green Lions", m.division_id).unwrap();
    let second = db.create_match(m.division_id, m.team1_id, third, date(3)).unwrap();

    db.reschedule_match(first, date(9)).unwrap();
    let ids: Vec<MatchId> = db
        .list_matches(Some(m.division_id))
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_stat_rows_filtering() {
    let (mut db, match_id, shooter, _) = create_test_db_with_fixture();
    let m = db.require_match(match_id).unwrap();
    db.record_result(
        match_id,
        MatchScore { team1: 10, team2: 8 },
        &[NewPlayerStat {
            player_id: shooter,
            line: StatLine {
                attempts: 12,
                goals: 10,
                ..StatLine::default()
            },
        }],
    )
    .unwrap();

    let all = StatFilter::default();
    assert_eq!(db.player_stat_rows(Some(shooter), &all).unwrap().len(), 1);

    let in_division = StatFilter {
        division_id: Some(m.division_id),
        ..StatFilter::default()
    };
    assert_eq!(db.player_stat_rows(None, &in_division).unwrap().len(), 1);

    let later = StatFilter {
        from: Some(date(2)),
        ..StatFilter::default()
    };
    assert!(db.player_stat_rows(Some(shooter), &later).unwrap().is_empty());

    let window = StatFilter {
        from: Some(date(1)),
        to: Some(date(1)),
        ..StatFilter::default()
    };
    assert_eq!(db.player_stat_rows(Some(shooter), &window).unwrap().len(), 1);
}

#[test]
fn test_delete_team_cascades() {
    let (mut db, match_id, shooter, keeper) = create_test_db_with_fixture();
    let m = db.require_match(match_id).unwrap();
    db.record_result(
        match_id,
        MatchScore { team1: 1, team2: 0 },
        &[NewPlayerStat {
            player_id: keeper,
            line: StatLine::default(),
        }],
    )
    .unwrap();

    db.delete_team(m.team1_id).unwrap();

    assert!(db.get_player(shooter).unwrap().is_none());
    assert!(db.get_match(match_id).unwrap().is_none());
    // The surviving player's stat row hung off the deleted match
    assert!(db
        .player_stat_rows(Some(keeper), &StatFilter::default())
        .unwrap()
        .is_empty());
    assert!(db.get_player(keeper).unwrap().is_some());
}

#[test]
fn test_delete_division_cascades() {
    let (mut db, match_id, shooter, _) = create_test_db_with_fixture();
    let m = db.require_match(match_id).unwrap();

    db.delete_division(m.division_id).unwrap();
    assert!(db.list_teams(None).unwrap().is_empty());
    assert!(db.get_player(shooter).unwrap().is_none());
    assert!(db.list_matches(None).unwrap().is_empty());
}

#[test]
fn test_seed_sample_data() {
    let mut db = create_test_db();
    let summary = db.seed_sample_data().unwrap();
    assert_eq!(summary.divisions, 2);
    assert_eq!(summary.teams, 4);
    assert_eq!(summary.players, 8);
    assert_eq!(summary.matches, 2);
    assert_eq!(db.list_matches(None).unwrap().len(), 2);
    assert!(db.list_matches(None).unwrap().iter().all(|m| m.is_played()));
}

#[test]
fn test_apply_roster_creates_and_skips() {
    let mut db = create_test_db();
    let rows = vec![
        RosterRow {
            team: "Hawks".to_string(),
            division: "Premier".to_string(),
            player: "Ana".to_string(),
            position: Position::GS,
        },
        RosterRow {
            team: "Hawks".to_string(),
            division: "Premier".to_string(),
            player: "Bo".to_string(),
            position: Position::GK,
        },
        RosterRow {
            team: "Owls".to_string(),
            division: "Premier".to_string(),
            player: "Cy".to_string(),
            position: Position::C,
        },
    ];

    let summary = db.apply_roster(&rows).unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            divisions_created: 1,
            teams_created: 2,
            players_created: 3,
            players_skipped: 0,
        }
    );

    let again = db.apply_roster(&rows).unwrap();
    assert_eq!(again.players_created, 0);
    assert_eq!(again.players_skipped, 3);
    assert_eq!(db.list_players(None).unwrap().len(), 3);
}
