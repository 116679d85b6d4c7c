//! List handler for GardenService

use crate::GardenService;
use crate::formatting;
use crate::garden::GardenTask;
use crate::validation::ListFilter;
use anyhow::{Result, anyhow};
use chrono::{Days, NaiveDate};

impl GardenService {
    /// List tasks, ordered by due date
    ///
    /// `filter` is one of all, active (default), inactive, overdue or
    /// upcoming. The remaining arguments narrow the result further.
    pub fn list(
        &self,
        filter: Option<String>,
        keyword: Option<String>,
        plant: Option<String>,
        bed: Option<String>,
        exclude_notes: bool,
        today: NaiveDate,
    ) -> Result<String> {
        let filter = match filter {
            Some(f) => f.parse::<ListFilter>().map_err(|e| anyhow!(e))?,
            None => ListFilter::default(),
        };

        let horizon = today
            .checked_add_days(Days::new(u64::from(self.config.upcoming_days)))
            .unwrap_or(NaiveDate::MAX);

        let mut tasks: Vec<&GardenTask> = self
            .data
            .sorted_by_next_due()
            .into_iter()
            .filter(|t| match filter {
                ListFilter::All => true,
                ListFilter::Active => t.active,
                ListFilter::Inactive => !t.active,
                ListFilter::Overdue => t.active && t.is_overdue(today),
                ListFilter::Upcoming => t.active && t.next_due.is_some_and(|d| d <= horizon),
            })
            .collect();

        if let Some(ref keyword) = keyword {
            formatting::apply_keyword_filter(&mut tasks, keyword);
        }
        if let Some(ref plant) = plant {
            formatting::apply_plant_filter(&mut tasks, plant);
        }
        if let Some(ref bed) = bed {
            formatting::apply_bed_filter(&mut tasks, bed);
        }

        Ok(formatting::format_tasks(&tasks, today, exclude_notes))
    }
}
