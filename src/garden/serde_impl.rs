//! Serialization and deserialization implementations for GardenData
//!
//! The file layout is a small header followed by an array of
//! [`TaskRecord`] tables. The id index is rebuilt on load.

use super::garden_data::{FORMAT_VERSION, GardenData};
use super::record::TaskRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

/// On-disk representation of [`GardenData`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenFile {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub task_counter: u32,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl From<&GardenData> for GardenFile {
    fn from(data: &GardenData) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            task_counter: data.task_counter,
            tasks: data.tasks.iter().map(TaskRecord::from).collect(),
        }
    }
}

impl GardenFile {
    /// Validate every record and assemble the collection
    ///
    /// # Returns
    /// `Err` for a file written by a newer format, or naming the first
    /// task that fails validation
    pub fn into_data(self, legacy_frequency: bool) -> Result<GardenData, String> {
        if self.format_version > FORMAT_VERSION {
            return Err(format!(
                "Unsupported format_version {} (this build reads up to {})",
                self.format_version, FORMAT_VERSION
            ));
        }

        let mut tasks = Vec::with_capacity(self.tasks.len());
        for record in self.tasks {
            let id = record.id.clone();
            let task = record
                .into_task(legacy_frequency)
                .map_err(|e| format!("Task '{}': {}", id, e))?;
            tasks.push(task);
        }
        GardenData::from_tasks(tasks, self.task_counter)
    }
}

impl Serialize for GardenData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        GardenFile::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GardenData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        GardenFile::deserialize(deserializer)?
            .into_data(false)
            .map_err(serde::de::Error::custom)
    }
}
