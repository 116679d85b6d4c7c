//! Calendar month arithmetic with day-of-month clamping

use chrono::{Months, NaiveDate};

/// Add `n` calendar months to `date`, clamping the day to the target month
///
/// January 31 plus one month lands on the last day of February rather
/// than spilling into March. `n` may be negative.
///
/// # Returns
/// `None` only when the result falls outside chrono's representable range
pub fn add_months(date: NaiveDate, n: i32) -> Option<NaiveDate> {
    let months = Months::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}
