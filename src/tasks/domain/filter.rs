//! Task list filtering.

use super::{ParseFilterError, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which tasks a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TasksFilterType {
    /// Every task.
    #[default]
    AllTasks,
    /// Tasks that are not completed.
    ActiveTasks,
    /// Tasks that are completed.
    CompletedTasks,
}

impl TasksFilterType {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllTasks => "all",
            Self::ActiveTasks => "active",
            Self::CompletedTasks => "completed",
        }
    }

    /// Returns `true` when `task` passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::AllTasks => true,
            Self::ActiveTasks => task.is_active(),
            Self::CompletedTasks => task.is_completed(),
        }
    }

    /// Lazily yields the tasks that pass this filter, in input order.
    pub fn apply<'a, I>(self, tasks: I) -> impl Iterator<Item = &'a Task>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        tasks.into_iter().filter(move |task| self.matches(task))
    }

    /// Consumes `tasks` and keeps the ones that pass this filter, in input
    /// order.
    #[must_use]
    pub fn filter(self, tasks: Vec<Task>) -> Vec<Task> {
        match self {
            Self::AllTasks => tasks,
            Self::ActiveTasks | Self::CompletedTasks => tasks
                .into_iter()
                .filter(|task| self.matches(task))
                .collect(),
        }
    }
}

impl TryFrom<&str> for TasksFilterType {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::AllTasks),
            "active" => Ok(Self::ActiveTasks),
            "completed" => Ok(Self::CompletedTasks),
            _ => Err(ParseFilterError(value.to_owned())),
        }
    }
}

impl fmt::Display for TasksFilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
