//! Stored shape of a garden task
//!
//! `TaskRecord` is the flat field contract shared with the persistence
//! layer: the frequency is kept as its text code and the seasonal window as
//! three plain fields. Conversion into [`GardenTask`] validates both.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::season::SeasonalWindow;
use super::task::GardenTask;
use crate::error::ScheduleError;

fn default_true() -> bool {
    true
}

fn default_start_month() -> u32 {
    1
}

fn default_end_month() -> u32 {
    12
}

/// One task as written to the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Frequency code, e.g. "7d" or "3m"
    pub frequency: String,
    #[serde(default = "default_true")]
    pub all_year: bool,
    #[serde(default = "default_start_month")]
    pub seasonal_start_month: u32,
    #[serde(default = "default_end_month")]
    pub seasonal_end_month: u32,
    #[serde(default = "default_true")]
    pub repeat: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_done: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<NaiveDate>,
}

impl From<&GardenTask> for TaskRecord {
    fn from(task: &GardenTask) -> Self {
        Self {
            id: task.id.clone(),
            name: task.name.clone(),
            plant: task.plant.clone(),
            bed: task.bed.clone(),
            notes: task.notes.clone(),
            frequency: task.frequency.to_string(),
            all_year: task.window.is_all_year(),
            seasonal_start_month: task.window.start_month(),
            seasonal_end_month: task.window.end_month(),
            repeat: task.repeat,
            active: task.active,
            last_done: task.last_done,
            next_due: task.next_due,
        }
    }
}

impl TaskRecord {
    /// Validate the record and build a task from it
    ///
    /// With `legacy_frequency` set an unreadable frequency code becomes
    /// every 7 days instead of an error.
    pub fn into_task(self, legacy_frequency: bool) -> Result<GardenTask, ScheduleError> {
        let frequency = if legacy_frequency {
            Frequency::parse_lenient(&self.frequency)
        } else {
            Frequency::parse(&self.frequency)?
        };
        let window = SeasonalWindow::from_fields(
            self.all_year,
            self.seasonal_start_month,
            self.seasonal_end_month,
        )?;

        Ok(GardenTask {
            id: self.id,
            name: self.name,
            plant: self.plant,
            bed: self.bed,
            notes: self.notes,
            frequency,
            window,
            repeat: self.repeat,
            active: self.active,
            last_done: self.last_done,
            next_due: self.next_due,
        })
    }
}
