//! TOML storage tests
mod common;

use common::{date, window};
use garden_timekeeper::{Frequency, GardenData, GardenTask, Storage};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("absent.toml"), false);
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("garden.toml"), false);

    let mut data = GardenData::new();
    let id = data.generate_task_id();
    data.add(GardenTask {
        id,
        name: "Feed".to_string(),
        plant: Some("Rose".to_string()),
        bed: Some("Front".to_string()),
        frequency: Frequency::months(1).unwrap(),
        window: window(3, 9),
        last_done: Some(date(2024, 4, 2)),
        next_due: Some(date(2024, 5, 2)),
        ..Default::default()
    })
    .unwrap();
    storage.save(&data).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.tasks(), data.tasks());
    assert_eq!(loaded.task_counter, 1);
}

#[test]
fn test_invalid_frequency_rejected_unless_legacy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("old.toml");
    fs::write(
        &path,
        r#"
task_counter = 1

[[tasks]]
id = "task-1"
name = "Water"
frequency = "weekly"
"#,
    )
    .unwrap();

    let err = Storage::new(&path, false).load().unwrap_err();
    assert!(err.to_string().contains("Task 'task-1'"));

    let data = Storage::new(&path, true).load().unwrap();
    assert_eq!(
        data.find_by_id("task-1").unwrap().frequency,
        Frequency::days(7).unwrap()
    );
}

#[test]
fn test_duplicate_ids_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.toml");
    fs::write(
        &path,
        r#"
[[tasks]]
id = "a"
name = "Water"
frequency = "7d"

[[tasks]]
id = "a"
name = "Feed"
frequency = "1m"
"#,
    )
    .unwrap();

    let err = Storage::new(&path, false).load().unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_newer_format_version_refuses_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garden.toml");
    fs::write(&path, "format_version = 99\ntask_counter = 0\n").unwrap();

    let err = Storage::new(&path, false).load().unwrap_err();
    assert!(err.to_string().contains("Unsupported format_version 99"));
}
