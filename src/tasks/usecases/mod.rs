//! Use cases invoked by the task list presenter.

mod activate_task;
mod clear_completed_tasks;
mod complete_task;
mod get_tasks;
mod use_case;

pub use activate_task::{ActivateTask, ActivateTaskRequest};
pub use clear_completed_tasks::ClearCompleteTasks;
pub use complete_task::{CompleteTask, CompleteTaskRequest};
pub use get_tasks::{GetTasks, GetTasksRequest, GetTasksResponse};
pub use use_case::UseCase;
