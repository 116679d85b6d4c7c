//! Due-date calculation for garden tasks
//!
//! Every function here is a pure function of its arguments. The current
//! date is always passed in; nothing reads the system clock.

use chrono::{Datelike, Days, NaiveDate};

use super::frequency::{Frequency, FrequencyKind};
use super::months::add_months;
use super::season::SeasonalWindow;
use super::task::GardenTask;
use crate::error::ScheduleError;

/// Upper bound on days examined when moving a date into season
pub const MAX_SCAN_DAYS: u32 = 366;

/// First due date of a task that has never been completed
///
/// Today if today is in season, otherwise the first day of the window's
/// start month, this year when `today.month() < start_month` and next year
/// otherwise. The before/after test is a plain numeric comparison of month
/// numbers.
///
/// # Errors
/// `DateOutOfRange` when next year's start month is past chrono's range
pub fn first_due(window: &SeasonalWindow, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    if window.is_in_season(today) {
        return Ok(today);
    }

    let start = window.start_month();
    let year = if today.month() < start {
        today.year()
    } else {
        today.year() + 1
    };
    NaiveDate::from_ymd_opt(year, start, 1).ok_or(ScheduleError::DateOutOfRange { base: today })
}

/// Move `base` forward by one frequency interval
pub fn apply_interval(base: NaiveDate, frequency: Frequency) -> Result<NaiveDate, ScheduleError> {
    let shifted = match frequency.kind() {
        FrequencyKind::Days => base.checked_add_days(Days::new(u64::from(frequency.magnitude()))),
        FrequencyKind::Months => i32::try_from(frequency.magnitude())
            .ok()
            .and_then(|n| add_months(base, n)),
    };
    shifted.ok_or(ScheduleError::DateOutOfRange { base })
}

/// Advance `start` one day at a time until `eligible` accepts it
///
/// # Errors
/// `SchedulingUnresolvable` after `max_days` rejected advances
pub(crate) fn scan_forward<F>(
    start: NaiveDate,
    max_days: u32,
    eligible: F,
) -> Result<NaiveDate, ScheduleError>
where
    F: Fn(NaiveDate) -> bool,
{
    let mut candidate = start;
    let mut attempts = 0;

    while !eligible(candidate) {
        if attempts == max_days {
            return Err(ScheduleError::SchedulingUnresolvable {
                from: start,
                attempts,
            });
        }
        candidate = candidate
            .succ_opt()
            .ok_or(ScheduleError::DateOutOfRange { base: candidate })?;
        attempts += 1;
    }

    if attempts > 0 {
        tracing::debug!(%start, %candidate, attempts, "moved due date into season");
    }
    Ok(candidate)
}

/// Apply one interval to `base` and move the result into season
pub fn next_in_season(
    base: NaiveDate,
    frequency: Frequency,
    window: &SeasonalWindow,
) -> Result<NaiveDate, ScheduleError> {
    let candidate = apply_interval(base, frequency)?;
    scan_forward(candidate, MAX_SCAN_DAYS, |d| window.is_in_season(d))
}

/// Next due date of `task`
///
/// A task that was never completed gets [`first_due`]. Otherwise one
/// interval is applied to `from_date` (or the last completion when
/// `from_date` is `None`) and the result is moved into season.
pub fn calculate_next_due(
    task: &GardenTask,
    from_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<NaiveDate, ScheduleError> {
    let Some(last_done) = task.last_done else {
        let due = first_due(&task.window, today)?;
        tracing::debug!(task = %task.id, %today, %due, "first due date");
        return Ok(due);
    };

    let base = from_date.unwrap_or(last_done);
    let due = next_in_season(base, task.frequency, &task.window)?;
    tracing::debug!(task = %task.id, %base, %due, "recurring due date");
    Ok(due)
}

/// Due date after skipping the current occurrence
///
/// The interval is applied to the current due date, or to today when none
/// is set. Completion history is not consulted.
pub fn skip_due(task: &GardenTask, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let base = task.next_due.unwrap_or(today);
    next_in_season(base, task.frequency, &task.window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_due_in_season_is_today() {
        let window = SeasonalWindow::new(5, 9).unwrap();
        assert_eq!(first_due(&window, date(2024, 5, 1)), Ok(date(2024, 5, 1)));
    }

    #[test]
    fn test_first_due_before_season() {
        let window = SeasonalWindow::new(6, 9).unwrap();
        assert_eq!(first_due(&window, date(2024, 3, 1)), Ok(date(2024, 6, 1)));
    }

    #[test]
    fn test_first_due_after_season() {
        let window = SeasonalWindow::new(4, 6).unwrap();
        assert_eq!(first_due(&window, date(2024, 12, 1)), Ok(date(2025, 4, 1)));
    }

    #[test]
    fn test_first_due_wrapping_window_out_of_season() {
        let window = SeasonalWindow::new(11, 2).unwrap();
        assert_eq!(first_due(&window, date(2024, 6, 15)), Ok(date(2024, 11, 1)));
        assert_eq!(first_due(&window, date(2024, 3, 1)), Ok(date(2024, 11, 1)));
        assert_eq!(first_due(&window, date(2024, 1, 20)), Ok(date(2024, 1, 20)));
    }

    #[test]
    fn test_first_due_all_year() {
        let today = date(2024, 8, 8);
        assert_eq!(first_due(&SeasonalWindow::all_year(), today), Ok(today));
    }

    #[test]
    fn test_first_due_past_last_representable_year() {
        let window = SeasonalWindow::new(3, 4).unwrap();
        let today = NaiveDate::MAX;
        assert_eq!(
            first_due(&window, today),
            Err(ScheduleError::DateOutOfRange { base: today })
        );
    }

    #[test]
    fn test_apply_interval_days_and_months() {
        let base = date(2024, 1, 31);
        assert_eq!(apply_interval(base, Frequency::days(7).unwrap()), Ok(date(2024, 2, 7)));
        assert_eq!(apply_interval(base, Frequency::months(1).unwrap()), Ok(date(2024, 2, 29)));
        assert_eq!(apply_interval(base, Frequency::months(13).unwrap()), Ok(date(2025, 2, 28)));
    }

    #[test]
    fn test_apply_interval_out_of_range() {
        assert_eq!(
            apply_interval(NaiveDate::MAX, Frequency::days(1).unwrap()),
            Err(ScheduleError::DateOutOfRange { base: NaiveDate::MAX })
        );
    }

    #[test]
    fn test_scan_forward_stops_at_first_eligible_day() {
        let window = SeasonalWindow::new(4, 6).unwrap();
        assert_eq!(
            scan_forward(date(2024, 1, 8), MAX_SCAN_DAYS, |d| window.is_in_season(d)),
            Ok(date(2024, 4, 1))
        );
    }

    #[test]
    fn test_scan_forward_gives_up_after_cap() {
        let start = date(2024, 1, 1);
        assert_eq!(
            scan_forward(start, MAX_SCAN_DAYS, |_| false),
            Err(ScheduleError::SchedulingUnresolvable {
                from: start,
                attempts: MAX_SCAN_DAYS,
            })
        );
    }

    #[test]
    fn test_scan_forward_longest_real_gap_fits_cap() {
        // December-only window seen from January 1st of a leap year
        let window = SeasonalWindow::new(12, 12).unwrap();
        assert_eq!(
            scan_forward(date(2024, 1, 1), MAX_SCAN_DAYS, |d| window.is_in_season(d)),
            Ok(date(2024, 12, 1))
        );
    }

    #[test]
    fn test_next_in_season_month_interval_into_wrapping_window() {
        let window = SeasonalWindow::new(11, 2).unwrap();
        let freq = Frequency::months(1).unwrap();
        assert_eq!(next_in_season(date(2024, 2, 15), freq, &window), Ok(date(2024, 11, 1)));
        assert_eq!(next_in_season(date(2024, 12, 31), freq, &window), Ok(date(2025, 1, 31)));
    }
}
