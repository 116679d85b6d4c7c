//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use garden_timekeeper::{Config, Frequency, GardenService, GardenTask, SeasonalWindow};
use tempfile::NamedTempFile;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Repeating task with the given frequency code and window
pub fn task(frequency: &str, window: SeasonalWindow) -> GardenTask {
    GardenTask::new(
        "task-1",
        "Water",
        Frequency::parse(frequency).unwrap(),
        window,
        true,
    )
}

pub fn window(start: u32, end: u32) -> SeasonalWindow {
    SeasonalWindow::new(start, end).unwrap()
}

/// Create a service with temporary storage
pub fn get_test_service() -> (GardenService, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let config = Config {
        data_file: temp_file.path().to_path_buf(),
        ..Config::default()
    };
    let service = GardenService::new(config).unwrap();
    (service, temp_file)
}

/// Extract task ID from add() response message
/// Response format: "Task created with ID: <id> (first due: <date>)"
pub fn extract_id_from_response(response: &str) -> String {
    let start = response.find("ID: ").unwrap() + 4;
    let rest = &response[start..];
    let end = rest.find(" (").unwrap();
    rest[..end].to_string()
}
