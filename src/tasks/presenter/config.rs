//! Presenter configuration.

use serde::Deserialize;

use crate::tasks::domain::TasksFilterType;

/// Settings for a [`super::TasksPresenter`].
///
/// # Examples
///
/// ```
/// use taskdeck::tasks::domain::TasksFilterType;
/// use taskdeck::tasks::presenter::PresenterConfig;
///
/// let config = PresenterConfig::default();
/// assert_eq!(config.initial_filter, TasksFilterType::AllTasks);
/// assert!(config.refresh_on_first_load);
///
/// let cached = PresenterConfig::without_initial_refresh();
/// assert!(!cached.refresh_on_first_load);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Filter in effect before the user picks one.
    pub initial_filter: TasksFilterType,
    /// Whether the first load asks the data source to refresh.
    pub refresh_on_first_load: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            initial_filter: TasksFilterType::AllTasks,
            refresh_on_first_load: true,
        }
    }
}

impl PresenterConfig {
    /// Creates a configuration whose first load trusts cached data.
    #[must_use]
    pub fn without_initial_refresh() -> Self {
        Self {
            refresh_on_first_load: false,
            ..Self::default()
        }
    }

    /// Sets the initial filter.
    #[must_use]
    pub const fn with_initial_filter(mut self, filter: TasksFilterType) -> Self {
        self.initial_filter = filter;
        self
    }
}
