//! Configuration for the JSON file store.

use camino::Utf8PathBuf;
use serde::Deserialize;

/// Default name of the task document inside the store directory.
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Location of the JSON task document.
///
/// # Examples
///
/// ```
/// use taskdeck::tasks::adapters::json_file::JsonFileStoreConfig;
///
/// let config = JsonFileStoreConfig::new("/var/lib/taskdeck");
/// assert_eq!(config.file_name, "tasks.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonFileStoreConfig {
    /// Directory holding the task document. Must already exist.
    pub directory: Utf8PathBuf,
    /// File name of the task document within `directory`. Must be a bare
    /// file name without path separators.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl JsonFileStoreConfig {
    /// Creates a configuration using the default file name.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_name: default_file_name(),
        }
    }

    /// Overrides the document file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_owned()
}
