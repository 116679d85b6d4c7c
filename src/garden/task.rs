use chrono::NaiveDate;
use std::fmt;

use super::frequency::{Frequency, LEGACY_FALLBACK};
use super::schedule;
use super::season::SeasonalWindow;
use crate::error::ScheduleError;

/// Derived lifecycle state of a task
///
/// Only `active` is stored on the task; the rest is computed against the
/// current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Active and due today or later (or not yet scheduled)
    ActivePending,
    /// Active and the due date has passed
    ActiveOverdue,
    /// Completed one-off task; permanent
    Inactive,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::ActivePending => "pending",
            TaskStatus::ActiveOverdue => "overdue",
            TaskStatus::Inactive => "inactive",
        };
        f.write_str(label)
    }
}

/// A recurring (or one-off) garden maintenance task
///
/// Created with no completion and `active = true`; the first due date is
/// computed right after construction with [`GardenTask::initialize_next_due`].
/// [`GardenTask::mark_done`] and [`GardenTask::skip`] are the only state
/// transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct GardenTask {
    /// Unique identifier (e.g. "task-3", "water-tomatoes")
    pub id: String,
    /// What to do, e.g. "Water"
    pub name: String,
    /// Plant the task belongs to
    pub plant: Option<String>,
    /// Bed the plant grows in
    pub bed: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Repeat interval
    pub frequency: Frequency,
    /// Months during which the task may fall due
    pub window: SeasonalWindow,
    /// Whether the task recurs after completion
    pub repeat: bool,
    /// False once a one-off task has been completed
    pub active: bool,
    /// Most recent completion
    pub last_done: Option<NaiveDate>,
    /// Next due date; always inside `window` when set
    pub next_due: Option<NaiveDate>,
}

impl Default for GardenTask {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            plant: None,
            bed: None,
            notes: None,
            frequency: LEGACY_FALLBACK,
            window: SeasonalWindow::all_year(),
            repeat: true,
            active: true,
            last_done: None,
            next_due: None,
        }
    }
}

impl GardenTask {
    /// Create a new, never-completed task
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        frequency: Frequency,
        window: SeasonalWindow,
        repeat: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            frequency,
            window,
            repeat,
            ..Default::default()
        }
    }

    /// Compute and store the first due date of a freshly created task
    pub fn initialize_next_due(&mut self, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        let due = self.calculate_next_due(None, today)?;
        self.next_due = Some(due);
        Ok(due)
    }

    /// Whether `date` lies inside this task's seasonal window
    pub fn is_in_season(&self, date: NaiveDate) -> bool {
        self.window.is_in_season(date)
    }

    /// Next due date without modifying the task
    ///
    /// See [`schedule::calculate_next_due`].
    pub fn calculate_next_due(
        &self,
        from_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<NaiveDate, ScheduleError> {
        schedule::calculate_next_due(self, from_date, today)
    }

    /// Record a completion on `done_date` (today when `None`)
    ///
    /// A one-off task becomes permanently inactive with no due date. A
    /// repeating task gets its next due date one interval after the
    /// completion, moved into season. The task is left untouched on error.
    ///
    /// # Errors
    /// `CompletionInFuture` if `done_date` is after `today`, or any
    /// scheduling error from the due-date calculation
    pub fn mark_done(
        &mut self,
        done_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), ScheduleError> {
        let done = done_date.unwrap_or(today);
        if done > today {
            return Err(ScheduleError::CompletionInFuture { done, today });
        }

        if !self.repeat {
            self.last_done = Some(done);
            self.active = false;
            self.next_due = None;
            tracing::info!(task = %self.id, %done, "one-off task completed, now inactive");
            return Ok(());
        }

        let next = schedule::next_in_season(done, self.frequency, &self.window)?;
        self.last_done = Some(done);
        self.next_due = Some(next);
        tracing::info!(task = %self.id, %done, next_due = %next, "task completed");
        Ok(())
    }

    /// Skip the current occurrence, returning the new due date
    ///
    /// Moves the due date one interval past the current one (or past today
    /// if none is set). Completion history and `active` are left alone.
    pub fn skip(&mut self, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        let next = schedule::skip_due(self, today)?;
        tracing::info!(task = %self.id, previous = ?self.next_due, next_due = %next, "task skipped");
        self.next_due = Some(next);
        Ok(next)
    }

    /// True when a due date is set and lies before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_due.is_some_and(|due| due < today)
    }

    /// Signed number of days from `today` to the due date
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.next_due
            .map(|due| due.signed_duration_since(today).num_days())
    }

    /// Derived lifecycle state on `today`
    pub fn status(&self, today: NaiveDate) -> TaskStatus {
        if !self.active {
            TaskStatus::Inactive
        } else if self.is_overdue(today) {
            TaskStatus::ActiveOverdue
        } else {
            TaskStatus::ActivePending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = GardenTask::new(
            "task-1",
            "Water",
            Frequency::days(3).unwrap(),
            SeasonalWindow::all_year(),
            true,
        );
        assert!(task.active);
        assert!(task.last_done.is_none());
        assert!(task.next_due.is_none());
        assert_eq!(task.status(date(2024, 1, 1)), TaskStatus::ActivePending);
    }

    #[test]
    fn test_mark_done_rejects_future_completion() {
        let mut task = GardenTask::default();
        let today = date(2024, 5, 1);
        let err = task.mark_done(Some(date(2024, 5, 2)), today).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::CompletionInFuture {
                done: date(2024, 5, 2),
                today,
            }
        );
        assert!(task.last_done.is_none());
    }

    #[test]
    fn test_mark_done_defaults_to_today() {
        let mut task = GardenTask::default();
        let today = date(2024, 5, 1);
        task.mark_done(None, today).unwrap();
        assert_eq!(task.last_done, Some(today));
        assert_eq!(task.next_due, Some(date(2024, 5, 8)));
    }

    #[test]
    fn test_status_transitions() {
        let today = date(2024, 6, 10);
        let mut task = GardenTask {
            next_due: Some(date(2024, 6, 1)),
            ..Default::default()
        };
        assert_eq!(task.status(today), TaskStatus::ActiveOverdue);

        task.repeat = false;
        task.mark_done(None, today).unwrap();
        assert_eq!(task.status(today), TaskStatus::Inactive);
        assert_eq!(task.status(today).to_string(), "inactive");
    }

    #[test]
    fn test_days_until_due_is_signed() {
        let task = GardenTask {
            next_due: Some(date(2024, 6, 1)),
            ..Default::default()
        };
        assert_eq!(task.days_until_due(date(2024, 5, 30)), Some(2));
        assert_eq!(task.days_until_due(date(2024, 6, 1)), Some(0));
        assert_eq!(task.days_until_due(date(2024, 6, 4)), Some(-3));
        assert_eq!(GardenTask::default().days_until_due(date(2024, 6, 4)), None);
    }
}
