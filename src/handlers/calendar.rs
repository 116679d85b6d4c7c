//! Calendar handler for GardenService

use crate::GardenService;
use crate::formatting;
use crate::garden::{GardenTask, month_name};
use crate::validation;
use chrono::NaiveDate;

impl GardenService {
    /// Tasks due in a selected month
    ///
    /// Invalid or past selections fall back to the current month, see
    /// [`validation::select_calendar_month`].
    pub fn calendar(&self, month: Option<&str>, year: Option<&str>, today: NaiveDate) -> String {
        let (year, month) = validation::select_calendar_month(month, year, today);

        let mut tasks: Vec<&GardenTask> = self.data.due_in_month(year, month);
        tasks.sort_by_key(|t| t.next_due);

        let mut result = format!("Tasks due in {} {}\n", month_name(month), year);
        if tasks.is_empty() {
            result.push_str("Nothing due this month");
            return result;
        }
        for task in tasks {
            result.push_str(&format!(
                "- {} [{}] {}",
                formatting::describe_due(task, today),
                task.id,
                task.name
            ));
            if let Some(ref plant) = task.plant {
                result.push_str(&format!(" ({})", plant));
            }
            result.push('\n');
        }
        result.trim_end().to_string()
    }
}
