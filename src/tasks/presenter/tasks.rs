//! Presenter for the task list screen.

use std::sync::Arc;
use tracing::debug;

use super::PresenterConfig;
use crate::tasks::{
    domain::{Task, TasksFilterType},
    execution::UseCaseHandler,
    ports::{DataNotAvailable, TasksDataSource, TasksView},
    usecases::{
        ActivateTask, ActivateTaskRequest, ClearCompleteTasks, CompleteTask, CompleteTaskRequest,
        GetTasks, GetTasksRequest, UseCase,
    },
};

/// Progress of the most recent task load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load succeeded.
    Loaded,
    /// The last load failed.
    Error,
}

/// What the add-task screen reported when it closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTaskOutcome {
    /// A new task was saved.
    Saved,
    /// The screen was dismissed without saving.
    Cancelled,
}

/// The use cases a [`TasksPresenter`] orchestrates.
#[derive(Debug)]
pub struct TasksUseCases<D: TasksDataSource + 'static> {
    get_tasks: Arc<GetTasks<D>>,
    complete_task: Arc<CompleteTask<D>>,
    activate_task: Arc<ActivateTask<D>>,
    clear_complete_tasks: Arc<ClearCompleteTasks<D>>,
}

impl<D: TasksDataSource + 'static> TasksUseCases<D> {
    /// Builds every use case over one shared data source.
    #[must_use]
    pub fn new(data_source: &Arc<D>) -> Self {
        Self {
            get_tasks: Arc::new(GetTasks::new(Arc::clone(data_source))),
            complete_task: Arc::new(CompleteTask::new(Arc::clone(data_source))),
            activate_task: Arc::new(ActivateTask::new(Arc::clone(data_source))),
            clear_complete_tasks: Arc::new(ClearCompleteTasks::new(Arc::clone(data_source))),
        }
    }
}

/// Mediates between the task use cases and a [`TasksView`].
///
/// The presenter owns the current filter and load state. Every signal that
/// carries an asynchronous result is dropped when the view reports itself
/// inactive.
pub struct TasksPresenter<D, V>
where
    D: TasksDataSource + 'static,
    V: TasksView,
{
    handler: UseCaseHandler,
    view: V,
    use_cases: TasksUseCases<D>,
    filtering: TasksFilterType,
    first_load: bool,
    state: LoadState,
}

impl<D, V> TasksPresenter<D, V>
where
    D: TasksDataSource + 'static,
    V: TasksView,
{
    /// Creates a presenter with the default configuration.
    #[must_use]
    pub fn new(handler: UseCaseHandler, view: V, use_cases: TasksUseCases<D>) -> Self {
        Self::with_config(handler, view, use_cases, PresenterConfig::default())
    }

    /// Creates a presenter with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        handler: UseCaseHandler,
        view: V,
        use_cases: TasksUseCases<D>,
        config: PresenterConfig,
    ) -> Self {
        Self {
            handler,
            view,
            use_cases,
            filtering: config.initial_filter,
            first_load: config.refresh_on_first_load,
            state: LoadState::Idle,
        }
    }

    /// Returns the view this presenter drives.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the filter in effect.
    #[must_use]
    pub const fn filtering(&self) -> TasksFilterType {
        self.filtering
    }

    /// Returns the state of the most recent load.
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// Changes the filter. Takes effect on the next [`Self::load_tasks`].
    pub const fn set_filtering(&mut self, filter: TasksFilterType) {
        self.filtering = filter;
    }

    /// Performs the initial load.
    pub async fn start(&mut self) {
        self.load_tasks(false).await;
    }

    /// Loads tasks under the current filter, showing the loading indicator.
    ///
    /// The first load after construction always asks the data source to
    /// refresh, unless the configuration disabled it.
    pub async fn load_tasks(&mut self, force_update: bool) {
        let force = force_update || self.first_load;
        self.first_load = false;
        self.load(force, true).await;
    }

    /// Opens the add-task screen.
    pub fn add_new_task(&self) {
        self.view.show_add_task();
    }

    /// Opens the detail screen for `task`.
    pub fn open_task_details(&self, task: &Task) {
        self.view.show_task_details_ui(task.id());
    }

    /// Reacts to the add-task screen closing.
    pub fn handle_add_task_result(&self, outcome: AddTaskOutcome) {
        if outcome == AddTaskOutcome::Saved {
            self.view.show_successfully_saved_message();
        }
    }

    /// Marks `task` complete, confirms it and reloads the list.
    pub async fn complete_task(&mut self, task: &Task) {
        let use_case = Arc::clone(&self.use_cases.complete_task);
        let request = CompleteTaskRequest { task_id: task.id() };
        self.apply_and_reload(&use_case, request, V::show_task_marked_complete).await;
    }

    /// Marks `task` active, confirms it and reloads the list.
    pub async fn activate_task(&mut self, task: &Task) {
        let use_case = Arc::clone(&self.use_cases.activate_task);
        let request = ActivateTaskRequest { task_id: task.id() };
        self.apply_and_reload(&use_case, request, V::show_task_marked_active).await;
    }

    /// Removes completed tasks, confirms it and reloads the list.
    pub async fn clear_completed_tasks(&mut self) {
        let use_case = Arc::clone(&self.use_cases.clear_complete_tasks);
        self.apply_and_reload(&use_case, (), V::show_completed_tasks_cleared).await;
    }

    async fn load(&mut self, force_update: bool, show_loading_ui: bool) {
        if show_loading_ui {
            self.view.set_loading_indicator(true);
        }
        self.state = LoadState::Loading;

        let request = GetTasksRequest::new(force_update, self.filtering);
        let result = self
            .handler
            .execute(&self.use_cases.get_tasks, request)
            .await;

        self.state = match result {
            Ok(_) => LoadState::Loaded,
            Err(DataNotAvailable) => LoadState::Error,
        };
        if !self.view.is_active() {
            debug!("view inactive, dropping task load result");
            return;
        }
        if show_loading_ui {
            self.view.set_loading_indicator(false);
        }

        match result {
            Ok(response) => {
                self.view.show_tasks(&response.tasks);
                self.view.show_filter_label(self.filtering);
            }
            Err(DataNotAvailable) => self.view.show_loading_tasks_error(),
        }
    }

    async fn apply_and_reload<U>(
        &mut self,
        use_case: &Arc<U>,
        request: U::Request,
        confirm: fn(&V),
    ) where
        U: UseCase<Response = ()>,
    {
        let result = self.handler.execute(use_case, request).await;
        if !self.view.is_active() {
            debug!("view inactive, dropping task update result");
            return;
        }
        match result {
            Ok(()) => {
                confirm(&self.view);
                self.load(false, false).await;
            }
            Err(DataNotAvailable) => self.view.show_loading_tasks_error(),
        }
    }
}
