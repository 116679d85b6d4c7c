//! Update handler for GardenService

use crate::GardenService;
use crate::garden::SeasonalWindow;
use crate::validation;
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// Field changes for an existing task
///
/// `None` leaves a field as it is. For `plant`, `bed` and `notes` an empty
/// string clears the value.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    /// Frequency code, e.g. "14d"
    pub frequency: Option<String>,
    pub start_month: Option<u32>,
    pub end_month: Option<u32>,
    /// Drop the seasonal window; conflicts with `start_month`/`end_month`
    pub all_year: bool,
    pub repeat: Option<bool>,
    pub plant: Option<String>,
    pub bed: Option<String>,
    pub notes: Option<String>,
}

fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl GardenService {
    /// Change the details of an active task
    ///
    /// The ID cannot be changed. When the new window no longer contains the
    /// stored due date, the due date is derived again for `today`.
    /// Nothing is changed when any field fails validation.
    pub fn update(&mut self, id: &str, changes: TaskUpdate, today: NaiveDate) -> Result<String> {
        let id = validation::normalize_task_id(id);
        let Some(current) = self.data.find_by_id(&id) else {
            bail!("Task '{}' not found. Use list to see available tasks.", id);
        };
        if !current.active {
            bail!("Task '{}' is inactive and cannot be edited", id);
        }

        let mut task = current.clone();

        if let Some(name) = changes.name {
            task.name = validation::validate_name(&name)?;
        }
        if let Some(code) = changes.frequency {
            task.frequency = validation::parse_frequency(&code)?;
        }

        let months_given = changes.start_month.is_some() || changes.end_month.is_some();
        if changes.all_year && months_given {
            bail!("Choose either all year or a start and end month, not both");
        }
        if changes.all_year {
            task.window = SeasonalWindow::all_year();
        } else if months_given {
            task.window = validation::parse_window(changes.start_month, changes.end_month)?;
        }

        if let Some(repeat) = changes.repeat {
            task.repeat = repeat;
        }
        if let Some(plant) = changes.plant {
            task.plant = optional_text(plant);
        }
        if let Some(bed) = changes.bed {
            task.bed = optional_text(bed);
        }
        if let Some(notes) = changes.notes {
            task.notes = optional_text(notes);
        }

        let mut response = format!("Task {} updated successfully", id);
        if let Some(due) = task.next_due
            && !task.is_in_season(due)
        {
            let next = task.calculate_next_due(None, today)?;
            task.next_due = Some(next);
            tracing::info!(task = %id, previous = %due, %next, "due date moved into new window");
            response.push_str(&format!(" (next due moved from {} to {})", due, next));
        }

        if let Some(slot) = self.data.find_by_id_mut(&id) {
            *slot = task;
        }
        self.save_data()?;

        Ok(response)
    }
}
