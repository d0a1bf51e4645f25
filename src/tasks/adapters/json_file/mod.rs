//! JSON file adapter used as the local task store.

mod config;
mod data_source;

pub use config::{DEFAULT_FILE_NAME, JsonFileStoreConfig};
pub use data_source::{JsonFileStoreError, JsonFileTasksDataSource};
