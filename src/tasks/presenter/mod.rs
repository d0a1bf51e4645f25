//! Presentation logic for the task list screen.

mod config;
mod tasks;

pub use config::PresenterConfig;
pub use tasks::{AddTaskOutcome, LoadState, TasksPresenter, TasksUseCases};
