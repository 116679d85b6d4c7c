//! Add handler for GardenService

use crate::GardenService;
use crate::garden::GardenTask;
use crate::validation;
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// Raw input for a new task, as entered by the user
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    /// Chosen ID; generated when `None`
    pub id: Option<String>,
    pub name: String,
    /// Frequency code, e.g. "7d"
    pub frequency: String,
    pub start_month: Option<u32>,
    pub end_month: Option<u32>,
    /// One-off when false
    pub repeat: bool,
    pub plant: Option<String>,
    pub bed: Option<String>,
    pub notes: Option<String>,
}

impl NewTask {
    /// Repeating, all-year task with a generated ID
    pub fn new(name: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frequency: frequency.into(),
            repeat: true,
            ..Default::default()
        }
    }
}

impl GardenService {
    /// Create a task and schedule its first due date
    ///
    /// Nothing is stored when any field fails validation.
    pub fn add(&mut self, request: NewTask, today: NaiveDate) -> Result<String> {
        let name = validation::validate_name(&request.name)?;
        let frequency = validation::parse_frequency(&request.frequency)?;
        let window = validation::parse_window(request.start_month, request.end_month)?;

        let id = match request.id {
            Some(id) => {
                let id = validation::normalize_task_id(&id);
                if id.is_empty() {
                    bail!("Task ID must not be empty");
                }
                if self.data.contains(&id) {
                    bail!("Task '{}' already exists", id);
                }
                id
            }
            None => self.data.generate_task_id(),
        };

        let mut task = GardenTask::new(id.clone(), name, frequency, window, request.repeat);
        task.plant = request.plant.filter(|p| !p.trim().is_empty());
        task.bed = request.bed.filter(|b| !b.trim().is_empty());
        task.notes = request.notes.filter(|n| !n.trim().is_empty());
        let due = task.initialize_next_due(today)?;

        if let Err(e) = self.data.add(task) {
            bail!("{}", e);
        }
        self.save_data()?;

        tracing::info!(task = %id, %due, "task created");
        Ok(format!("Task created with ID: {} (first due: {})", id, due))
    }
}
