//! Tests for command handlers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::cli::types::{
        DivisionId, FixturePolicy, LeaderboardSort, MatchId, PlayerId, Position, StatEntry, TeamId,
    };
    use crate::cli::{
        Commands, DivisionCmd, FixturesCmd, MatchCmd, NetballCli, PlayerCmd, ResultCmd, StatScope,
        TeamCmd,
    };
    use crate::commands::{entities, reports, schedule, transfer};
    use crate::storage::StatFilter;
    use chrono::NaiveDate;
    use clap::Parser;

    fn create_test_db() -> TournamentDatabase {
        TournamentDatabase::new_in_memory().unwrap()
    }

    fn no_scope() -> StatScope {
        StatScope {
            division: None,
            from: None,
            to: None,
        }
    }

    #[test]
    fn test_resolve_db_path_precedence() {
        std::env::remove_var(DB_PATH_ENV_VAR);

        let explicit = PathBuf::from("/tmp/explicit.db");
        std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from_env.db");
        assert_eq!(resolve_db_path(Some(explicit.clone())).unwrap(), explicit);
        assert_eq!(
            resolve_db_path(None).unwrap(),
            PathBuf::from("/tmp/from_env.db")
        );

        // Blank values fall through to the data directory
        std::env::set_var(DB_PATH_ENV_VAR, "   ");
        match resolve_db_path(None) {
            Ok(path) => assert!(path.ends_with(DEFAULT_DB_FILE)),
            Err(NetballError::MissingDatabasePath { env_var }) => {
                assert_eq!(env_var, DB_PATH_ENV_VAR);
            }
            Err(other) => panic!("Unexpected error: {:?}", other),
        }

        std::env::remove_var(DB_PATH_ENV_VAR);
    }

    #[test]
    fn test_handle_init_sample_and_reset() {
        let mut db = create_test_db();
        handle_init(&mut db, true, false).unwrap();
        assert_eq!(db.list_divisions().unwrap().len(), 2);

        handle_init(&mut db, false, true).unwrap();
        assert!(db.list_divisions().unwrap().is_empty());
        assert_eq!(db.table_names().unwrap().len(), 5);
    }

    #[test]
    fn test_entity_handlers() {
        let mut db = create_test_db();
        entities::handle_division(
            &mut db,
            DivisionCmd::Add {
                name: "Premier".to_string(),
            },
        )
        .unwrap();
        let division = DivisionId::new(1);

        entities::handle_team(
            &mut db,
            TeamCmd::Add {
                name: "Hawks".to_string(),
                division,
            },
        )
        .unwrap();
        entities::handle_player(
            &mut db,
            PlayerCmd::Add {
                name: "Ana".to_string(),
                position: Position::GS,
                team: TeamId::new(1),
            },
        )
        .unwrap();
        entities::handle_player(
            &mut db,
            PlayerCmd::Update {
                id: PlayerId::new(1),
                name: None,
                position: Some(Position::GA),
            },
        )
        .unwrap();

        assert_eq!(
            db.require_player(PlayerId::new(1)).unwrap().position,
            Position::GA
        );
        entities::handle_player(&mut db, PlayerCmd::List { team: None, json: true }).unwrap();
        entities::handle_team(&mut db, TeamCmd::List { division: None, json: false }).unwrap();
        entities::handle_division(&mut db, DivisionCmd::List { json: false }).unwrap();

        entities::handle_division(&mut db, DivisionCmd::Delete { id: division }).unwrap();
        assert!(db.list_players(None).unwrap().is_empty());
    }

    #[test]
    fn test_entity_handler_errors_propagate() {
        let mut db = create_test_db();
        let err = entities::handle_team(
            &mut db,
            TeamCmd::Add {
                name: "Hawks".to_string(),
                division: DivisionId::new(9),
            },
        )
        .unwrap_err();
        assert!(matches!(err, NetballError::NotFound { entity: "Division", id: 9 }));

        let err = entities::handle_division(
            &mut db,
            DivisionCmd::Add {
                name: " ".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_schedule_handlers() {
        let mut db = create_test_db();
        let division = db.create_division("Premier").unwrap();
        let a = db.create_team("A", division).unwrap();
        let b = db.create_team("B", division).unwrap();
        let shooter = db.create_player("Ana", Position::GS, a).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        schedule::handle_fixtures(
            &mut db,
            FixturesCmd::Generate {
                division,
                date: Some(date),
                policy: FixturePolicy::Reject,
            },
        )
        .unwrap();
        let matches = db.list_matches(Some(division)).unwrap();
        assert_eq!(matches.len(), 1);
        let match_id = matches[0].id;

        let err = schedule::handle_fixtures(
            &mut db,
            FixturesCmd::Generate {
                division,
                date: Some(date),
                policy: FixturePolicy::Reject,
            },
        )
        .unwrap_err();
        assert!(matches!(err, NetballError::FixturesExist { count: 1, .. }));

        schedule::handle_result(
            &mut db,
            ResultCmd::Record {
                id: match_id,
                score1: 12,
                score2: 9,
                stats: vec![format!("{}=14,12", shooter).parse::<StatEntry>().unwrap()],
            },
        )
        .unwrap();
        schedule::handle_match(&mut db, MatchCmd::Show { id: match_id, json: false }).unwrap();
        schedule::handle_match(&mut db, MatchCmd::List { division: None, json: true }).unwrap();

        let table = crate::stats::division_standings(&db, division).unwrap();
        assert_eq!(table[0].team_id, a);
        assert_eq!(table[0].points, 3);
        assert_eq!(table[1].team_id, b);

        schedule::handle_result(&mut db, ResultCmd::Clear { id: match_id }).unwrap();
        assert!(!db.require_match(match_id).unwrap().is_played());

        let err = schedule::handle_match(
            &mut db,
            MatchCmd::Delete {
                id: MatchId::new(99),
            },
        )
        .unwrap_err();
        assert!(matches!(err, NetballError::NotFound { entity: "Match", .. }));
    }

    #[test]
    fn test_report_handlers() {
        let mut db = create_test_db();
        db.seed_sample_data().unwrap();

        reports::handle_standings(&db, DivisionId::new(1), false).unwrap();
        reports::handle_standings(&db, DivisionId::new(1), true).unwrap();
        reports::handle_player_stats(&db, PlayerId::new(1), &no_scope(), false).unwrap();
        reports::handle_leaderboard(&db, &no_scope(), LeaderboardSort::Accuracy, Some(3), false)
            .unwrap();

        let err = reports::handle_player_stats(&db, PlayerId::new(404), &no_scope(), true)
            .unwrap_err();
        assert!(matches!(err, NetballError::NotFound { entity: "Player", .. }));
    }

    #[test]
    fn test_stat_scope_into_filter() {
        let scope = StatScope {
            division: Some(DivisionId::new(2)),
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: None,
        };
        let filter = StatFilter::from(&scope);
        assert_eq!(filter.division_id, Some(DivisionId::new(2)));
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.to, None);
        assert_eq!(StatFilter::from(&no_scope()), StatFilter::default());
    }

    #[test]
    fn test_transfer_handlers() {
        let mut db = create_test_db();
        let dir = tempfile::TempDir::new().unwrap();
        let roster = dir.path().join("roster.csv");
        std::fs::write(&roster, "Team,Division,Player,Position\nHawks,Premier,Ana,GS\n").unwrap();

        transfer::handle_import(&mut db, &roster).unwrap();
        assert_eq!(db.list_players(None).unwrap().len(), 1);

        let out = dir.path().join("out");
        transfer::handle_export(&db, &out).unwrap();
        assert!(out.join("standings.csv").exists());
    }

    #[test]
    fn test_cli_parses_record_with_stats() {
        let cli = NetballCli::try_parse_from([
            "netball-stats",
            "--db",
            "test.db",
            "result",
            "record",
            "3",
            "--score1",
            "40",
            "--score2",
            "38",
            "--stat",
            "5=20,15",
            "--stat",
            "6=0,0,12",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("test.db")));
        match cli.command {
            Commands::Result {
                cmd: ResultCmd::Record { id, score1, stats, .. },
            } => {
                assert_eq!(id, MatchId::new(3));
                assert_eq!(score1, 40);
                assert_eq!(stats.len(), 2);
                assert_eq!(stats[0].0.line.goals, 15);
                assert_eq!(stats[1].0.line.center_passes, 12);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_bad_ids_and_positions() {
        assert!(NetballCli::try_parse_from(["netball-stats", "standings", "-d", "0"]).is_err());
        assert!(NetballCli::try_parse_from([
            "netball-stats",
            "player",
            "add",
            "Ana",
            "--position",
            "striker",
            "--team",
            "1",
        ])
        .is_err());

        let cli = NetballCli::try_parse_from([
            "netball-stats",
            "leaderboard",
            "--sort",
            "center-passes",
            "--from",
            "2024-01-01",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Leaderboard { scope, sort, .. } => {
                assert_eq!(sort, LeaderboardSort::CenterPasses);
                assert_eq!(scope.from, NaiveDate::from_ymd_opt(2024, 1, 1));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
