//! Port contracts for the task list.
//!
//! Ports define the storage and rendering interfaces the presenter and use
//! cases depend on.

pub mod data_source;
pub mod view;

pub use data_source::{DataNotAvailable, DataSourceResult, TasksDataSource};
pub use view::TasksView;
