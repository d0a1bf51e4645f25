//! Adapter implementations for the task data source port.

pub mod cached;
pub mod json_file;
pub mod memory;
