//! Mark-done handler for GardenService

use super::batch_report;
use crate::GardenService;
use crate::validation;
use anyhow::{Result, bail};
use chrono::NaiveDate;

impl GardenService {
    /// Record a completion for one or more tasks
    ///
    /// `done_date` defaults to today and may not lie in the future. Each
    /// ID is processed independently; the data is saved if any succeeded.
    pub fn mark_done(
        &mut self,
        ids: Vec<String>,
        done_date: Option<String>,
        today: NaiveDate,
    ) -> Result<String> {
        if ids.is_empty() {
            bail!("No IDs provided. Please specify at least one task ID.");
        }

        let done = done_date
            .as_deref()
            .map(validation::parse_date)
            .transpose()?;

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

            match task.mark_done(done, today) {
                Ok(()) => {
                    let outcome = match task.next_due {
                        Some(next) => format!("next due {}", next),
                        None => "one-off task, now inactive".to_string(),
                    };
                    successes.push(format!("{} ({}): {}", id, task.name, outcome));
                }
                Err(e) => failures.push(format!("{}: {}", id, e)),
            }
        }

        if !successes.is_empty() {
            self.save_data()?;
        }

        batch_report("marked done", &successes, &failures)
    }
}
