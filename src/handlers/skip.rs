//! Skip handler for GardenService

use super::batch_report;
use crate::GardenService;
use crate::validation;
use anyhow::{Result, bail};
use chrono::NaiveDate;

impl GardenService {
    /// Skip the current occurrence of one or more tasks
    pub fn skip(&mut self, ids: Vec<String>, today: NaiveDate) -> Result<String> {
        if ids.is_empty() {
            bail!("No IDs provided. Please specify at least one task ID.");
        }

        let mut successes = Vec::new();
        let mut failures = Vec::new();

        for id in ids.iter().map(|id| validation::normalize_task_id(id)) {
            let Some(task) = self.data.find_by_id_mut(&id) else {
                failures.push(format!("{}: not found", id));
                continue;
            };
            if !task.active {
                failures.push(format!("{}: task is inactive", id));
                continue;
            }

            let previous = task.next_due;
            match task.skip(today) {
                Ok(next) => {
                    let from = previous
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "unscheduled".to_string());
                    successes.push(format!("{} ({}): {} → {}", id, task.name, from, next));
                }
                Err(e) => failures.push(format!("{}: {}", id, e)),
            }
        }

        if !successes.is_empty() {
            self.save_data()?;
        }

        batch_report("skipped", &successes, &failures)
    }
}
