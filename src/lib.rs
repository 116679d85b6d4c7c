//! Garden Timekeeper Library
//!
//! Scheduling engine and task tracker for recurring garden maintenance
//! (watering, pruning, feeding). Tasks repeat every N days or N months and
//! may be restricted to a seasonal window of months, possibly wrapping the
//! year boundary.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Workflow Layer**: `GardenService` - validates input, runs batch operations, reports results
//! - **Domain Layer**: `garden` module - the pure due-date engine and task collection
//! - **Persistence Layer**: `storage` module - TOML file storage
//!
//! The domain layer never reads the clock. Every operation that depends on
//! the current date takes it as a `today` argument.
//!
//! # Example
//!
//! ```no_run
//! use garden_timekeeper::{Config, GardenService, NewTask};
//! use garden_timekeeper::garden::local_date_today;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut service = GardenService::new(Config::default())?;
//!     let today = local_date_today();
//!     service.add(NewTask::new("Water", "7d"), today)?;
//!     println!("{}", service.list(None, None, None, None, false, today)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod garden;
mod handlers;
pub mod storage;
pub mod validation;

use anyhow::Result;

// Re-export commonly used types
pub use config::Config;
pub use error::ScheduleError;
pub use garden::{Frequency, FrequencyKind, GardenData, GardenTask, SeasonalWindow, TaskStatus};
pub use handlers::{NewTask, TaskUpdate};
pub use storage::Storage;

/// Workflow handler for garden task management
///
/// Owns the task collection and its storage. Each handler validates its
/// input, applies engine operations and persists the result, returning a
/// human-readable report.
pub struct GardenService {
    pub(crate) data: GardenData,
    pub(crate) storage: Storage,
    pub(crate) config: Config,
}

impl GardenService {
    /// Create a service backed by the data file named in `config`
    ///
    /// # Example
    /// ```no_run
    /// # use garden_timekeeper::{Config, GardenService};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let service = GardenService::new(Config::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let storage = Storage::new(&config.data_file, config.legacy_frequency_fallback);
        let data = storage.load()?;
        Ok(Self {
            data,
            storage,
            config,
        })
    }

    /// Read-only access to the task collection
    pub fn data(&self) -> &GardenData {
        &self.data
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn save_data(&self) -> Result<()> {
        self.storage.save(&self.data)
    }
}
