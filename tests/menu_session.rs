//! Console Menu Session Tests
//!
//! Drives complete menu sessions from scripted input and checks both the
//! resulting store and what the user saw.

use opampdb::cli::{show_to, Config, Menu};
use opampdb::database::{RecordStore, SortKey};
use opampdb::storage::OpAmp;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn run_session(input: &str, path: &Path) -> (RecordStore, String) {
    let mut menu = Menu::new(Cursor::new(input.to_string()), Vec::new(), path);
    menu.run().expect("session runs to completion");
    let (store, output) = menu.into_parts();
    (store, String::from_utf8(output).expect("utf-8 output"))
}

fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_enter_save_then_load_in_new_session() {
    let dir = create_temp_dir();
    let path = dir.path().join("database.txt");

    let (first, output) = run_session("1\nLM358\n8\n0.5\n1\n741\n8\n0.5\n2\n6\n", &path);
    assert_eq!(first.len(), 2);
    assert!(output.contains("Saved 2 records"));

    let (second, output) = run_session("3\n5\n6\n", &path);
    assert_eq!(second.records(), first.records());
    assert!(output.contains("Loaded 2 records"));
    assert!(output.contains("LM358"));
}

#[test]
fn test_load_failure_is_reported_and_session_continues() {
    let dir = create_temp_dir();
    let path = dir.path().join("database.txt");
    fs::write(&path, "42\n").unwrap();

    let (store, output) = run_session("1 OP07 8 0.3\n3\n5\n6\n", &path);

    assert_eq!(store.len(), 1);
    assert!(output.contains("Corrupt database file"));
    assert!(output.contains("OP07"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = create_temp_dir();
    let path = dir.path().join("absent.txt");

    let (store, output) = run_session("3\n6\n", &path);

    assert!(store.is_empty());
    assert!(output.contains("Could not open database file"));
}

#[test]
fn test_sort_by_slew_rate_from_menu() {
    let dir = create_temp_dir();
    let path = dir.path().join("database.txt");

    let (store, _) = run_session("1 TL072 14 13\n1 LM358 8 0.5\n1 741 8 0.5\n4\n2\n6\n", &path);

    let names: Vec<_> = store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["LM358", "741", "TL072"]);
}

#[test]
fn test_full_store_session() {
    let dir = create_temp_dir();
    let path = dir.path().join("database.txt");

    let mut input = String::new();
    for i in 0..11 {
        input.push_str(&format!("1\nOP{}\n8\n{}\n", i, i));
    }
    input.push_str("6\n");

    let (store, output) = run_session(&input, &path);

    // The 11th "1" hits a full store; its answers are then read as menu options
    assert_eq!(store.len(), 10);
    assert!(output.contains("The database is full"));
    assert!(output.contains("Invalid entry"));
}

#[test]
fn test_menu_over_existing_store() {
    let dir = create_temp_dir();
    let path = dir.path().join("database.txt");

    let mut store = RecordStore::new();
    store.add(OpAmp::parse("741", 8, 0.5).unwrap()).unwrap();

    let mut menu = Menu::with_store(Cursor::new("5\n6\n"), Vec::new(), &path, store);
    menu.run().unwrap();

    assert_eq!(menu.store().len(), 1);
    let (_, output) = menu.into_parts();
    assert!(String::from_utf8(output).unwrap().contains("741"));
}

// =============================================================================
// One-shot show command
// =============================================================================

#[test]
fn test_show_prints_sorted_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("database.txt");
    fs::write(&path, "3\nTL072\n14\n13\nLM358\n8\n0.5\n741\n8\n0.5\n").unwrap();

    let config = Config::default().with_overrides(Some(path), None);
    let mut out = Vec::new();

    show_to(&config, SortKey::Name, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("741"));
    assert!(rows[1].starts_with("LM358"));
    assert!(rows[2].starts_with("TL072"));
}

#[test]
fn test_show_empty_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("database.txt");
    fs::write(&path, "0\n").unwrap();

    let config = Config::default().with_overrides(Some(path), None);
    let mut out = Vec::new();

    show_to(&config, SortKey::None, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "The database is empty\n");
}

#[test]
fn test_config_file_round_trip() {
    let dir = create_temp_dir();
    let config_path = dir.path().join("opampdb.json");
    fs::write(
        &config_path,
        r#"{"database_file": "parts.txt", "log_level": "error"}"#,
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();

    assert_eq!(config.database_file, Path::new("parts.txt"));
    assert_eq!(config.log_level, "error");
}
