//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let err = NetballError::from(io_error);

    match err {
        NetballError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err = NetballError::from(json_error);

    match err {
        NetballError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_sqlite_error_conversion() {
    let sqlite_error = rusqlite::Error::QueryReturnedNoRows;
    let err = NetballError::from(sqlite_error);

    match err {
        NetballError::Database(rusqlite::Error::QueryReturnedNoRows) => (),
        _ => panic!("Expected Database error variant"),
    }
}

#[test]
fn test_anyhow_error_conversion() {
    let anyhow_error = anyhow::anyhow!("Test anyhow error message");
    let err = NetballError::from(anyhow_error);

    match err {
        NetballError::Storage { message } => {
            assert!(message.contains("Test anyhow error message"));
        }
        _ => panic!("Expected Storage error variant"),
    }
}

#[test]
fn test_anyhow_preserves_typed_errors() {
    let wrapped: anyhow::Error = NetballError::SameTeam { team_id: 4 }.into();
    let err = NetballError::from(wrapped);

    match err {
        NetballError::SameTeam { team_id } => assert_eq!(team_id, 4),
        other => panic!("Expected SameTeam, got {:?}", other),
    }
}

#[test]
fn test_anyhow_preserves_sqlite_errors() {
    let wrapped: anyhow::Error = rusqlite::Error::QueryReturnedNoRows.into();
    let err = NetballError::from(wrapped);

    assert!(matches!(err, NetballError::Database(_)));
}

#[test]
fn test_error_display_messages() {
    let err = NetballError::NotFound {
        entity: "Team",
        id: 42,
    };
    assert_eq!(err.to_string(), "Team not found: 42");

    let err = NetballError::GoalsExceedAttempts {
        player_id: 7,
        goals: 12,
        attempts: 10,
    };
    assert_eq!(
        err.to_string(),
        "Player 7: goals (12) exceed attempts (10)"
    );

    let err = NetballError::EmptyName { entity: "Division" };
    assert_eq!(err.to_string(), "Division name must not be empty");
}

#[test]
fn test_import_rejected_lists_every_row() {
    let err = NetballError::ImportRejected {
        errors: vec![
            RowError {
                line: 3,
                message: "missing Player".to_string(),
            },
            RowError {
                line: 5,
                message: "Invalid position: XX".to_string(),
            },
        ],
    };

    let text = err.to_string();
    assert!(text.contains("line 3: missing Player"));
    assert!(text.contains("line 5: Invalid position: XX"));
}

#[test]
fn test_validation_classification() {
    assert!(NetballError::SameTeam { team_id: 1 }.is_validation());
    assert!(NetballError::ResultAlreadyRecorded { match_id: 1 }.is_validation());
    assert!(!NetballError::NotFound {
        entity: "Player",
        id: 1
    }
    .is_validation());
    assert!(!NetballError::Storage {
        message: "locked".to_string()
    }
    .is_validation());
}
