//! Task data source persisted as a JSON document.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, warn};

use super::JsonFileStoreConfig;
use crate::tasks::{
    domain::{Task, TaskId},
    ports::{DataNotAvailable, DataSourceResult, TasksDataSource},
};

/// Errors raised while opening the JSON file store.
#[derive(Debug, Error)]
pub enum JsonFileStoreError {
    /// The configured directory could not be opened.
    #[error("failed to open task store directory {directory}: {source}")]
    OpenDirectory {
        /// Directory that was requested.
        directory: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The document name is empty or names something other than a plain
    /// file directly inside the store directory.
    #[error("invalid task document name {file_name:?}: expected a bare file name")]
    InvalidFileName {
        /// Name that was rejected.
        file_name: String,
    },
}

#[derive(Debug)]
struct Store {
    dir: Dir,
    file_name: String,
    temp_name: String,
}

/// Local task storage backed by one JSON file.
///
/// Access is confined to the configured directory. Every write rewrites the
/// whole document through a temporary file that is renamed into place, so a
/// reader never observes a half-written list. Blocking file I/O runs on
/// tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct JsonFileTasksDataSource {
    store: Arc<Mutex<Store>>,
}

impl JsonFileTasksDataSource {
    /// Opens the store described by `config`.
    ///
    /// The document itself is created lazily on first write; a missing
    /// document reads as an empty task list.
    ///
    /// # Errors
    ///
    /// Returns [`JsonFileStoreError::InvalidFileName`] when the configured
    /// file name is not a bare file name, and
    /// [`JsonFileStoreError::OpenDirectory`] when the directory does not
    /// exist or cannot be opened.
    pub fn open(config: &JsonFileStoreConfig) -> Result<Self, JsonFileStoreError> {
        validate_file_name(&config.file_name)?;
        let dir = Dir::open_ambient_dir(&config.directory, ambient_authority()).map_err(
            |source| JsonFileStoreError::OpenDirectory {
                directory: config.directory.clone(),
                source,
            },
        )?;
        Self::from_dir(dir, &config.file_name)
    }

    /// Wraps an already opened directory capability.
    ///
    /// # Errors
    ///
    /// Returns [`JsonFileStoreError::InvalidFileName`] when `file_name` is
    /// empty or contains a path separator.
    pub fn from_dir(dir: Dir, file_name: &str) -> Result<Self, JsonFileStoreError> {
        validate_file_name(file_name)?;
        Ok(Self {
            store: Arc::new(Mutex::new(Store {
                dir,
                file_name: file_name.to_owned(),
                temp_name: format!(".{file_name}.tmp"),
            })),
        })
    }

    async fn read_tasks(&self) -> DataSourceResult<Vec<Task>> {
        let store = Arc::clone(&self.store);
        run_blocking(move || {
            let guard = lock(&store)?;
            load(&guard)
        })
        .await
    }

    async fn modify_tasks<F>(&self, modify: F) -> DataSourceResult<()>
    where
        F: FnOnce(&mut Vec<Task>) + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        run_blocking(move || {
            let guard = lock(&store)?;
            let mut tasks = load(&guard)?;
            modify(&mut tasks);
            persist(&guard, &tasks)
        })
        .await
    }
}

/// The temporary file lives next to the document, so the name must not
/// reach into subdirectories or parents.
fn validate_file_name(file_name: &str) -> Result<(), JsonFileStoreError> {
    if Utf8Path::new(file_name).file_name() == Some(file_name) {
        Ok(())
    } else {
        Err(JsonFileStoreError::InvalidFileName {
            file_name: file_name.to_owned(),
        })
    }
}

async fn run_blocking<F, T>(operation: F) -> DataSourceResult<T>
where
    F: FnOnce() -> DataSourceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|err| {
            warn!(error = %err, "task store operation did not complete");
            DataNotAvailable
        })?
}

fn lock(store: &Mutex<Store>) -> DataSourceResult<std::sync::MutexGuard<'_, Store>> {
    store.lock().map_err(|err| {
        warn!(error = %err, "task store lock poisoned");
        DataNotAvailable
    })
}

fn load(store: &Store) -> DataSourceResult<Vec<Task>> {
    let contents = match store.dir.read_to_string(&store.file_name) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(file = %store.file_name, "task document missing, reading as empty");
            return Ok(Vec::new());
        }
        Err(err) => {
            warn!(file = %store.file_name, error = %err, "failed to read task document");
            return Err(DataNotAvailable);
        }
    };
    serde_json::from_str(&contents).map_err(|err| {
        warn!(file = %store.file_name, error = %err, "task document is corrupt");
        DataNotAvailable
    })
}

fn persist(store: &Store, tasks: &[Task]) -> DataSourceResult<()> {
    let contents = serde_json::to_string_pretty(tasks).map_err(|err| {
        warn!(error = %err, "failed to encode task document");
        DataNotAvailable
    })?;
    store
        .dir
        .write(&store.temp_name, contents)
        .and_then(|()| {
            store
                .dir
                .rename(&store.temp_name, &store.dir, &store.file_name)
        })
        .map_err(|err| {
            warn!(file = %store.file_name, error = %err, "failed to write task document");
            DataNotAvailable
        })
}

fn set_completed(tasks: &mut [Task], id: TaskId, completed: bool) {
    match tasks.iter_mut().find(|task| task.id() == id) {
        Some(task) if completed => task.complete(),
        Some(task) => task.activate(),
        None => debug!(task_id = %id, "ignoring update for unknown task"),
    }
}

#[async_trait]
impl TasksDataSource for JsonFileTasksDataSource {
    async fn get_tasks(&self) -> DataSourceResult<Vec<Task>> {
        self.read_tasks().await
    }

    async fn get_task(&self, id: TaskId) -> DataSourceResult<Task> {
        self.read_tasks()
            .await?
            .into_iter()
            .find(|task| task.id() == id)
            .ok_or(DataNotAvailable)
    }

    async fn save_task(&self, task: &Task) -> DataSourceResult<()> {
        let task = task.clone();
        self.modify_tasks(move |tasks| {
            match tasks.iter_mut().find(|stored| stored.id() == task.id()) {
                Some(stored) => *stored = task,
                None => tasks.push(task),
            }
        })
        .await
    }

    async fn complete_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.modify_tasks(move |tasks| set_completed(tasks, id, true)).await
    }

    async fn activate_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.modify_tasks(move |tasks| set_completed(tasks, id, false)).await
    }

    async fn clear_completed_tasks(&self) -> DataSourceResult<()> {
        self.modify_tasks(|tasks| tasks.retain(Task::is_active)).await
    }

    async fn refresh_tasks(&self) {}

    async fn delete_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.modify_tasks(move |tasks| tasks.retain(|task| task.id() != id)).await
    }

    async fn delete_all_tasks(&self) -> DataSourceResult<()> {
        self.modify_tasks(Vec::clear).await
    }
}
