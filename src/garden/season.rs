use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::ScheduleError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a month number, or an empty string outside 1..=12
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Annual range of months during which a task may fall due
///
/// A window either covers the whole year or runs from `start_month` to
/// `end_month` inclusive. When `start_month > end_month` the window wraps
/// the year boundary, e.g. November through February.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalWindow {
    all_year: bool,
    start_month: u32,
    end_month: u32,
}

impl Default for SeasonalWindow {
    fn default() -> Self {
        Self::all_year()
    }
}

impl SeasonalWindow {
    /// A window with no seasonal restriction
    pub fn all_year() -> Self {
        Self {
            all_year: true,
            start_month: 1,
            end_month: 12,
        }
    }

    /// Create a window from `start_month` to `end_month` inclusive
    ///
    /// # Errors
    /// `InvalidMonthRange` if either month is outside 1..=12
    pub fn new(start_month: u32, end_month: u32) -> Result<Self, ScheduleError> {
        for month in [start_month, end_month] {
            if !(1..=12).contains(&month) {
                return Err(ScheduleError::InvalidMonthRange { month });
            }
        }
        Ok(Self {
            all_year: false,
            start_month,
            end_month,
        })
    }

    /// Build a window from the stored field triple
    ///
    /// The months are ignored (and not validated) when `all_year` is set.
    pub fn from_fields(
        all_year: bool,
        start_month: u32,
        end_month: u32,
    ) -> Result<Self, ScheduleError> {
        if all_year {
            Ok(Self::all_year())
        } else {
            Self::new(start_month, end_month)
        }
    }

    pub fn is_all_year(&self) -> bool {
        self.all_year
    }

    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    pub fn end_month(&self) -> u32 {
        self.end_month
    }

    /// Whether the window crosses from December into January
    pub fn wraps(&self) -> bool {
        !self.all_year && self.start_month > self.end_month
    }

    /// Check whether `date` falls inside the window
    pub fn is_in_season(&self, date: NaiveDate) -> bool {
        self.contains_month(date.month())
    }

    /// Check whether a month number falls inside the window
    pub fn contains_month(&self, month: u32) -> bool {
        if self.all_year {
            return true;
        }
        if self.start_month <= self.end_month {
            (self.start_month..=self.end_month).contains(&month)
        } else {
            month >= self.start_month || month <= self.end_month
        }
    }

    /// Eligible months in window order, starting from `start_month`
    pub fn months(&self) -> Vec<u32> {
        if self.all_year {
            return (1..=12).collect();
        }
        let span = (self.end_month + 12 - self.start_month) % 12 + 1;
        (0..span)
            .map(|offset| (self.start_month - 1 + offset) % 12 + 1)
            .collect()
    }
}

impl fmt::Display for SeasonalWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_year {
            write!(f, "All year")
        } else if self.start_month == self.end_month {
            write!(f, "{}", month_name(self.start_month))
        } else {
            write!(
                f,
                "{} - {}",
                month_name(self.start_month),
                month_name(self.end_month)
            )
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
    fn test_all_year_accepts_every_month() {
        let window = SeasonalWindow::all_year();
        for month in 1..=12 {
            assert!(window.is_in_season(date(2024, month, 15)));
        }
    }

    #[test]
    fn test_plain_window_bounds_inclusive() {
        let window = SeasonalWindow::new(4, 6).unwrap();
        assert!(!window.is_in_season(date(2024, 3, 31)));
        assert!(window.is_in_season(date(2024, 4, 1)));
        assert!(window.is_in_season(date(2024, 6, 30)));
        assert!(!window.is_in_season(date(2024, 7, 1)));
    }

    #[test]
    fn test_wrapping_window() {
        let window = SeasonalWindow::new(11, 2).unwrap();
        assert!(window.wraps());
        assert!(window.is_in_season(date(2024, 12, 1)));
        assert!(window.is_in_season(date(2024, 1, 1)));
        assert!(window.is_in_season(date(2024, 2, 29)));
        assert!(!window.is_in_season(date(2024, 3, 1)));
        assert!(!window.is_in_season(date(2024, 6, 1)));
    }

    #[test]
    fn test_single_month_window() {
        let window = SeasonalWindow::new(5, 5).unwrap();
        assert!(window.is_in_season(date(2024, 5, 20)));
        assert!(!window.is_in_season(date(2024, 4, 30)));
        assert!(!window.is_in_season(date(2024, 6, 1)));
        assert_eq!(window.months(), vec![5]);
    }

    #[test]
    fn test_invalid_months_rejected() {
        assert_eq!(
            SeasonalWindow::new(0, 5),
            Err(ScheduleError::InvalidMonthRange { month: 0 })
        );
        assert_eq!(
            SeasonalWindow::new(3, 13),
            Err(ScheduleError::InvalidMonthRange { month: 13 })
        );
    }

    #[test]
    fn test_from_fields_ignores_months_when_all_year() {
        let window = SeasonalWindow::from_fields(true, 0, 99).unwrap();
        assert!(window.is_all_year());
        assert!(SeasonalWindow::from_fields(false, 0, 99).is_err());
    }

    #[test]
    fn test_months_in_window_order() {
        let window = SeasonalWindow::new(11, 2).unwrap();
        assert_eq!(window.months(), vec![11, 12, 1, 2]);
        assert_eq!(SeasonalWindow::new(4, 6).unwrap().months(), vec![4, 5, 6]);
        assert_eq!(SeasonalWindow::all_year().months().len(), 12);
    }

    #[test]
    fn test_display() {
        assert_eq!(SeasonalWindow::all_year().to_string(), "All year");
        assert_eq!(
            SeasonalWindow::new(11, 2).unwrap().to_string(),
            "November - February"
        );
        assert_eq!(SeasonalWindow::new(7, 7).unwrap().to_string(), "July");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(2), "February");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
