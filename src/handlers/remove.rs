//! Remove handler for GardenService

use crate::GardenService;
use crate::validation;
use anyhow::{Result, bail};

impl GardenService {
    /// Permanently delete a task
    pub fn remove(&mut self, id: &str) -> Result<String> {
        let id = validation::normalize_task_id(id);
        let Some(task) = self.data.remove(&id) else {
            bail!("Task '{}' not found", id);
        };
        self.save_data()?;
        Ok(format!("Removed task {} ({})", task.id, task.name))
    }
}
