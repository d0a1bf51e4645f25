//! Task entity.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// A to-do item with a stable identity and a completion flag.
///
/// The identifier is fixed at construction. Title and description may be
/// empty; only [`Task::complete`] and [`Task::activate`] mutate the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    completed: bool,
}

impl Task {
    /// Creates a new active task with a freshly generated identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(TaskId::new(), title, description, false)
    }

    /// Creates a new task that is already completed.
    #[must_use]
    pub fn new_completed(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(TaskId::new(), title, description, true)
    }

    /// Reconstructs a task with a known identifier, e.g. from storage.
    #[must_use]
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns `true` when the task is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }

    /// Text to show in a list row: the title, or the description when the
    /// title is blank.
    #[must_use]
    pub fn title_for_list(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.description
        } else {
            &self.title
        }
    }

    /// Returns `true` when both title and description are blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.description.trim().is_empty()
    }

    /// Marks the task as completed. Idempotent.
    pub const fn complete(&mut self) {
        self.completed = true;
    }

    /// Marks the task as active again. Idempotent.
    pub const fn activate(&mut self) {
        self.completed = false;
    }
}
