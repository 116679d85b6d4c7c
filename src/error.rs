//! Error types for the scheduling engine.

use chrono::NaiveDate;

/// Errors raised while building or scheduling a garden task.
///
/// None of these are transient. Each one points at a malformed task
/// configuration that has to be corrected where it was entered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Frequency code is not `<integer><d|m>` with a positive integer.
    #[error("invalid frequency '{code}': expected a positive number followed by 'd' or 'm' (e.g. '7d', '3m')")]
    InvalidFrequencyFormat {
        /// The code as it was supplied.
        code: String,
    },

    /// Seasonal month outside 1..=12.
    #[error("invalid month {month}: seasonal months must be between 1 and 12")]
    InvalidMonthRange {
        /// The offending month number.
        month: u32,
    },

    /// Forward-scan ran out of attempts without reaching an in-season date.
    #[error("no in-season date found within {attempts} days after {from}")]
    SchedulingUnresolvable {
        /// Candidate date the scan started from.
        from: NaiveDate,
        /// Number of days examined.
        attempts: u32,
    },

    /// Completion date lies after the current date.
    #[error("completion date {done} is in the future (today is {today})")]
    CompletionInFuture {
        /// Requested completion date.
        done: NaiveDate,
        /// The injected current date.
        today: NaiveDate,
    },

    /// Calendar arithmetic left the range chrono can represent.
    #[error("date arithmetic from {base} is out of range")]
    DateOutOfRange {
        /// Date the interval was applied to.
        base: NaiveDate,
    },
}
