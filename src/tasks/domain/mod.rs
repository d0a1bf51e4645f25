//! Domain model for the task list.
//!
//! Plain task values and the filter predicate over them. Nothing here knows
//! about storage, scheduling or rendering.

mod error;
mod filter;
mod ids;
mod task;

pub use error::ParseFilterError;
pub use filter::TasksFilterType;
pub use ids::TaskId;
pub use task::Task;
