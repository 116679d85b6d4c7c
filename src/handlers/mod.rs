//! Workflow handlers for GardenService
//!
//! Each handler lives in its own module as an `impl GardenService` block.

mod add;
mod calendar;
mod list;
mod mark_done;
mod remove;
mod skip;
mod update;

pub use add::NewTask;
pub use update::TaskUpdate;

use anyhow::{Result, bail};

/// Assemble the report of a batch operation
///
/// Fails with the whole report when nothing succeeded.
fn batch_report(action: &str, successes: &[String], failures: &[String]) -> Result<String> {
    let plural = |n: usize| if n == 1 { "" } else { "s" };
    let mut response = String::new();

    if !successes.is_empty() {
        response.push_str(&format!(
            "Successfully {} {} task{}:\n",
            action,
            successes.len(),
            plural(successes.len())
        ));
        for line in successes {
            response.push_str(&format!("- {}\n", line));
        }
    }

    if !failures.is_empty() {
        if !response.is_empty() {
            response.push('\n');
        }
        response.push_str(&format!(
            "Failed for {} task{}:\n",
            failures.len(),
            plural(failures.len())
        ));
        for failure in failures {
            response.push_str(&format!("- {}\n", failure));
        }
    }

    if successes.is_empty() {
        bail!("{}", response.trim());
    }
    Ok(response.trim().to_string())
}
