//! Garden task domain: seasonal windows, frequencies and due-date scheduling
//!
//! The scheduling engine is pure and deterministic. It is split into:
//! - `season`: annual month windows a task may fall due in
//! - `frequency`: validated repeat intervals (`7d`, `3m`)
//! - `months`: calendar month arithmetic with day clamping
//! - `schedule`: first/next/skip due-date calculation
//! - `task`: the task entity and its lifecycle transitions
//!
//! and the collection layer around it:
//! - `garden_data`: all tasks of one data file
//! - `queries`: overdue, monthly and sorted views
//! - `record` / `serde_impl`: the stored field contract

mod frequency;
mod garden_data;
pub mod months;
mod queries;
mod record;
pub mod schedule;
mod season;
mod serde_impl;
mod task;

pub use frequency::{Frequency, FrequencyKind, LEGACY_FALLBACK};
pub use garden_data::{FORMAT_VERSION, GardenData};
pub use months::add_months;
pub use record::TaskRecord;
pub use schedule::{MAX_SCAN_DAYS, calculate_next_due};
pub use season::{SeasonalWindow, month_name};
pub use serde_impl::GardenFile;
pub use task::{GardenTask, TaskStatus};

use chrono::{Local, NaiveDate};

/// Get the current date in local timezone
///
/// Only the binary calls this; library code takes `today` as a parameter.
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}
