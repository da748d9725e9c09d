//! Integration tests for command handlers

use auction_scout::{
    commands::admin::handle_import,
    storage::{PlayerFilters, ScoutDatabase},
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_import_command_loads_json_rows() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "P1", "role": "Bowler", "base_price": 30, "skill_rating": 9}},
            {{"name": "P2", "role": "All-rounder", "base_price": 45, "skill_rating": 7,
              "nationality": "England", "age": 29}}
        ]"#
    )
    .unwrap();

    let mut db = ScoutDatabase::open_in_memory().unwrap();
    handle_import(&mut db, file.path()).unwrap();

    let players = db.fetch_players(&PlayerFilters::default()).unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[1].nationality, "England");
}

#[test]
fn test_import_command_rejects_non_array_payload() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"name": "P1"}}"#).unwrap();

    let mut db = ScoutDatabase::open_in_memory().unwrap();
    let result = handle_import(&mut db, file.path());

    assert!(result.is_err());
    assert!(db.fetch_players(&PlayerFilters::default()).unwrap().is_empty());
}

#[test]
fn test_import_command_missing_file_is_an_error() {
    let mut db = ScoutDatabase::open_in_memory().unwrap();
    let result = handle_import(&mut db, std::path::Path::new("/nonexistent/players.json"));
    assert!(result.is_err());
}
