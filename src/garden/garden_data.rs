use super::task::GardenTask;
use std::collections::HashSet;

/// Current format version written to the TOML file
pub const FORMAT_VERSION: u32 = 1;

/// All garden tasks of one data file
///
/// Tasks live in a Vec so the TOML file keeps insertion order and produces
/// stable diffs. `task_ids` mirrors the ids for duplicate detection and is
/// rebuilt on load, never serialized.
#[derive(Debug, Clone)]
pub struct GardenData {
    /// Format version for the TOML file
    pub format_version: u32,

    pub(crate) tasks: Vec<GardenTask>,

    pub(crate) task_ids: HashSet<String>,

    /// Counter for generating unique task IDs
    pub task_counter: u32,
}

impl Default for GardenData {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            tasks: Vec::new(),
            task_ids: HashSet::new(),
            task_counter: 0,
        }
    }
}

impl GardenData {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from already-validated tasks
    ///
    /// # Returns
    /// `Err` with the first duplicated id
    pub fn from_tasks(tasks: Vec<GardenTask>, task_counter: u32) -> Result<Self, String> {
        let mut data = Self {
            task_counter,
            ..Self::default()
        };
        for task in tasks {
            data.add(task)?;
        }
        Ok(data)
    }

    /// Generate a new unique task ID
    ///
    /// Skips counter values already taken by hand-chosen ids.
    pub fn generate_task_id(&mut self) -> String {
        loop {
            self.task_counter += 1;
            let id = format!("task-{}", self.task_counter);
            if !self.task_ids.contains(&id) {
                return id;
            }
        }
    }

    /// Number of tasks, active or not
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[GardenTask] {
        &self.tasks
    }

    /// Whether a task with `id` exists
    pub fn contains(&self, id: &str) -> bool {
        self.task_ids.contains(id)
    }

    /// Find a task by its ID
    pub fn find_by_id(&self, id: &str) -> Option<&GardenTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its ID and return a mutable reference
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut GardenTask> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Add a task to the collection
    ///
    /// # Returns
    /// `Err` with a message if the ID is already taken
    pub fn add(&mut self, task: GardenTask) -> Result<(), String> {
        if !self.task_ids.insert(task.id.clone()) {
            return Err(format!("Task '{}' already exists", task.id));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove a task from the collection and return it
    pub fn remove(&mut self, id: &str) -> Option<GardenTask> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        self.task_ids.remove(id);
        Some(self.tasks.remove(pos))
    }
}
