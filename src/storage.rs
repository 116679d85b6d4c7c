use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use crate::garden::{GardenData, GardenFile};

pub struct Storage {
    file_path: PathBuf,
    legacy_frequency: bool,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>, legacy_frequency: bool) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            legacy_frequency,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<GardenData> {
        if !self.file_path.exists() {
            tracing::debug!(path = %self.file_path.display(), "data file missing, starting empty");
            return Ok(GardenData::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let file: GardenFile = toml::from_str(&content)?;
        let data = file
            .into_data(self.legacy_frequency)
            .map_err(|e| anyhow!("{}: {}", self.file_path.display(), e))?;
        tracing::debug!(path = %self.file_path.display(), tasks = data.task_count(), "loaded garden data");
        Ok(data)
    }

    pub fn save(&self, data: &GardenData) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)?;
        tracing::debug!(path = %self.file_path.display(), tasks = data.task_count(), "saved garden data");
        Ok(())
    }
}
