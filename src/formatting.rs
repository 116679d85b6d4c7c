//! Formatting helper functions for the garden workflow layer
//!
//! This module contains filtering and display logic for task listings.

use crate::garden::GardenTask;
use chrono::NaiveDate;

/// Apply keyword filtering (case-insensitive search in id, name, plant and notes)
pub fn apply_keyword_filter(tasks: &mut Vec<&GardenTask>, keyword: &str) {
    let keyword_lower = keyword.to_lowercase();
    let matches = |field: Option<&String>| {
        field
            .map(|v| v.to_lowercase().contains(&keyword_lower))
            .unwrap_or(false)
    };
    tasks.retain(|task| {
        task.id.to_lowercase().contains(&keyword_lower)
            || task.name.to_lowercase().contains(&keyword_lower)
            || matches(task.plant.as_ref())
            || matches(task.notes.as_ref())
    });
}

/// Keep tasks for the given plant (case-insensitive)
pub fn apply_plant_filter(tasks: &mut Vec<&GardenTask>, plant: &str) {
    tasks.retain(|task| {
        task.plant
            .as_ref()
            .is_some_and(|p| p.eq_ignore_ascii_case(plant))
    });
}

/// Keep tasks in the given bed (case-insensitive)
pub fn apply_bed_filter(tasks: &mut Vec<&GardenTask>, bed: &str) {
    tasks.retain(|task| {
        task.bed
            .as_ref()
            .is_some_and(|b| b.eq_ignore_ascii_case(bed))
    });
}

/// Describe a due date relative to `today`, e.g. "2024-05-08 (in 3 days)"
pub fn describe_due(task: &GardenTask, today: NaiveDate) -> String {
    let (Some(due), Some(days)) = (task.next_due, task.days_until_due(today)) else {
        return "not scheduled".to_string();
    };
    let plural = |n: i64| if n == 1 { "" } else { "s" };
    match days {
        0 => format!("{} (today)", due),
        d if d > 0 => format!("{} (in {} day{})", due, d, plural(d)),
        d => format!("{} (overdue by {} day{})", due, -d, plural(-d)),
    }
}

/// Format tasks into a display string
pub fn format_tasks(tasks: &[&GardenTask], today: NaiveDate, exclude_notes: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} (every {}, {}, status: {})\n",
            task.id,
            task.name,
            task.frequency,
            task.window,
            task.status(today)
        ));

        if let Some(ref plant) = task.plant {
            result.push_str(&format!("  Plant: {}\n", plant));
        }
        if let Some(ref bed) = task.bed {
            result.push_str(&format!("  Bed: {}\n", bed));
        }
        if !exclude_notes && let Some(ref n) = task.notes {
            result.push_str(&format!("  Notes: {}\n", n));
        }
        if task.active {
            result.push_str(&format!("  Next due: {}\n", describe_due(task, today)));
        }
        if let Some(ref date) = task.last_done {
            result.push_str(&format!("  Last done: {}\n", date));
        }
        if !task.repeat {
            result.push_str("  One-off\n");
        }
    }

    result
}
