//! Query methods for GardenData
//!
//! Filters used by the list and calendar views. All of them take the
//! current date as a parameter.

use super::garden_data::GardenData;
use super::task::GardenTask;
use chrono::{Datelike, NaiveDate};

impl GardenData {
    /// Tasks that are still active
    pub fn active(&self) -> Vec<&GardenTask> {
        self.tasks.iter().filter(|t| t.active).collect()
    }

    /// Completed one-off tasks
    pub fn inactive(&self) -> Vec<&GardenTask> {
        self.tasks.iter().filter(|t| !t.active).collect()
    }

    /// Active tasks whose due date has passed
    pub fn overdue(&self, today: NaiveDate) -> Vec<&GardenTask> {
        self.tasks
            .iter()
            .filter(|t| t.active && t.is_overdue(today))
            .collect()
    }

    /// Active tasks due on or before `date` (overdue ones included)
    pub fn due_on_or_before(&self, date: NaiveDate) -> Vec<&GardenTask> {
        self.tasks
            .iter()
            .filter(|t| t.active && t.next_due.is_some_and(|due| due <= date))
            .collect()
    }

    /// Active tasks whose due date falls in `month` of `year`
    pub fn due_in_month(&self, year: i32, month: u32) -> Vec<&GardenTask> {
        self.tasks
            .iter()
            .filter(|t| {
                t.active
                    && t.next_due
                        .is_some_and(|due| due.year() == year && due.month() == month)
            })
            .collect()
    }

    /// All tasks ordered by due date, unscheduled tasks last
    ///
    /// Ties keep insertion order.
    pub fn sorted_by_next_due(&self) -> Vec<&GardenTask> {
        let mut tasks: Vec<&GardenTask> = self.tasks.iter().collect();
        tasks.sort_by_key(|t| (t.next_due.is_none(), t.next_due));
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> GardenData {
        let mut data = GardenData::new();
        let tasks = [
            ("water", Some(date(2024, 5, 1)), true),
            ("feed", Some(date(2024, 5, 20)), true),
            ("prune", None, true),
            ("plant-out", None, false),
            ("mulch", Some(date(2024, 6, 2)), true),
        ];
        for (id, next_due, active) in tasks {
            data.add(GardenTask {
                id: id.to_string(),
                name: id.to_string(),
                next_due,
                active,
                ..Default::default()
            })
            .unwrap();
        }
        data
    }

    fn ids(tasks: Vec<&GardenTask>) -> Vec<&str> {
        tasks.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_active_and_inactive() {
        let data = sample();
        assert_eq!(data.active().len(), 4);
        assert_eq!(ids(data.inactive()), vec!["plant-out"]);
    }

    #[test]
    fn test_overdue() {
        let data = sample();
        assert_eq!(ids(data.overdue(date(2024, 5, 10))), vec!["water"]);
        assert!(data.overdue(date(2024, 5, 1)).is_empty());
    }

    #[test]
    fn test_due_on_or_before() {
        let data = sample();
        assert_eq!(ids(data.due_on_or_before(date(2024, 5, 20))), vec!["water", "feed"]);
    }

    #[test]
    fn test_due_in_month() {
        let data = sample();
        assert_eq!(ids(data.due_in_month(2024, 5)), vec!["water", "feed"]);
        assert_eq!(ids(data.due_in_month(2024, 6)), vec!["mulch"]);
        assert!(data.due_in_month(2025, 5).is_empty());
    }

    #[test]
    fn test_sorted_by_next_due_puts_unscheduled_last() {
        let data = sample();
        assert_eq!(
            ids(data.sorted_by_next_due()),
            vec!["water", "feed", "mulch", "prune", "plant-out"]
        );
    }
}
