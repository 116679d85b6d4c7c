//! Validation helper functions for the garden workflow layer
//!
//! Turns raw user input (CLI arguments, form values) into validated engine
//! values, with messages meant to be shown back to the user.

use crate::garden::{Frequency, SeasonalWindow};
use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// Parse a date in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(d) => Ok(d),
        Err(_) => bail!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ),
    }
}

/// Parse a frequency code, surfacing the engine error unchanged
pub fn parse_frequency(code: &str) -> Result<Frequency> {
    Ok(Frequency::parse(code)?)
}

/// Build a seasonal window from optional start/end months
///
/// No months means all year. Giving only one of the two is an error.
pub fn parse_window(start_month: Option<u32>, end_month: Option<u32>) -> Result<SeasonalWindow> {
    match (start_month, end_month) {
        (None, None) => Ok(SeasonalWindow::all_year()),
        (Some(start), Some(end)) => Ok(SeasonalWindow::new(start, end)?),
        _ => bail!("Seasonal window needs both a start and an end month"),
    }
}

/// Reject empty task names
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        bail!("Task name must not be empty");
    }
    Ok(trimmed.to_string())
}

/// Normalize task ID by trimming surrounding whitespace
pub fn normalize_task_id(task_id: &str) -> String {
    task_id.trim().to_string()
}

/// Which tasks the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    All,
    #[default]
    Active,
    Inactive,
    Overdue,
    /// Active tasks due within the configured look-ahead
    Upcoming,
}

impl FromStr for ListFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ListFilter::All),
            "active" => Ok(ListFilter::Active),
            "inactive" => Ok(ListFilter::Inactive),
            "overdue" => Ok(ListFilter::Overdue),
            "upcoming" => Ok(ListFilter::Upcoming),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, active, inactive, overdue, upcoming",
                s
            )),
        }
    }
}

/// Resolve the month shown by the calendar view
///
/// Unparsable values, a month outside 1..=12, or a month before the
/// current one all snap back to today's month.
///
/// # Returns
/// `(year, month)`
pub fn select_calendar_month(
    month: Option<&str>,
    year: Option<&str>,
    today: NaiveDate,
) -> (i32, u32) {
    let current = (today.year(), today.month());

    let (Some(month), Some(year)) = (month, year) else {
        return current;
    };
    let (Ok(month), Ok(year)) = (month.trim().parse::<u32>(), year.trim().parse::<i32>()) else {
        return current;
    };
    if !(1..=12).contains(&month) || (year, month) < current {
        return current;
    }
    (year, month)
}
