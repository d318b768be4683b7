use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date format used for task store keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Muscle group affected by an exercise task.
///
/// The group is the conflict key for pause-day enforcement: two tasks that
/// share a group may not land within each other's pause window, regardless
/// of which plan created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum MuscleGroup {
    #[serde(rename = "high-impact")]
    #[value(name = "high-impact")]
    HighImpact,
    #[serde(rename = "low-impact")]
    #[value(name = "low-impact")]
    LowImpact,
    #[serde(rename = "strength/stability")]
    #[value(name = "strength/stability")]
    StrengthStability,
    #[serde(rename = "wrist")]
    #[value(name = "wrist")]
    Wrist,
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MuscleGroup::HighImpact => "high-impact",
            MuscleGroup::LowImpact => "low-impact",
            MuscleGroup::StrengthStability => "strength/stability",
            MuscleGroup::Wrist => "wrist",
        };
        write!(f, "{}", name)
    }
}

impl MuscleGroup {
    /// All groups in presentation order, for interactive selection.
    pub fn all() -> [MuscleGroup; 4] {
        [
            MuscleGroup::HighImpact,
            MuscleGroup::LowImpact,
            MuscleGroup::StrengthStability,
            MuscleGroup::Wrist,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub completed: bool,
    pub muscle_group: MuscleGroup,
}

impl Task {
    pub fn new(name: &str, muscle_group: MuscleGroup) -> Self {
        Task {
            name: name.to_string(),
            completed: false,
            muscle_group,
        }
    }
}

/// Day-indexed task mapping keyed by ISO date string.
///
/// Keys are created lazily the first time the scheduler visits a date; a
/// date with no entry simply has no tasks. Tasks keep positional identity
/// within their day's list.
pub type TaskStore = BTreeMap<String, Vec<Task>>;

/// Formats a date as a task store key.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Completion toggle applied against the store through a single entry point.
///
/// Days strictly before `today` are read-only: applying the command to one
/// returns `Ok(false)` and leaves the store untouched.
#[derive(Debug, Clone)]
pub struct ToggleTask {
    pub day_key: String,
    pub index: usize,
    pub completed: bool,
}

impl ToggleTask {
    pub fn new(day_key: &str, index: usize, completed: bool) -> Self {
        ToggleTask {
            day_key: day_key.to_string(),
            index,
            completed,
        }
    }

    /// Applies the toggle, reporting whether the store was mutated.
    pub fn apply(&self, store: &mut TaskStore, today: NaiveDate) -> Result<bool> {
        let date = NaiveDate::parse_from_str(&self.day_key, DATE_FORMAT)
            .map_err(|_| msg_error_anyhow!(Message::InvalidDate(self.day_key.clone())))?;
        if date < today {
            return Ok(false);
        }
        let tasks = match store.get_mut(&self.day_key) {
            Some(tasks) => tasks,
            None => msg_bail_anyhow!(Message::TasksNotFoundForDate(self.day_key.clone())),
        };
        match tasks.get_mut(self.index) {
            Some(task) => {
                task.completed = self.completed;
                Ok(true)
            }
            None => msg_bail_anyhow!(Message::TaskNotFoundAtIndex(self.index, self.day_key.clone())),
        }
    }
}
