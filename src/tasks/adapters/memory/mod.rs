//! In-memory adapter for tests and for simulating a remote service.

mod data_source;

pub use data_source::InMemoryTasksDataSource;
