//! Shared world state for task list BDD scenarios.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rstest::fixture;
use taskdeck::tasks::{
    adapters::memory::InMemoryTasksDataSource,
    domain::{Task, TaskId, TasksFilterType},
    execution::UseCaseHandler,
    ports::TasksView,
    presenter::{TasksPresenter, TasksUseCases},
};

/// Presenter type used by the BDD world.
pub type TestPresenter = TasksPresenter<InMemoryTasksDataSource, Arc<RecordingView>>;

/// A signal pushed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSignal {
    /// Loading indicator shown (`true`) or hidden (`false`).
    LoadingIndicator(bool),
    /// Tasks rendered, in display order.
    Tasks(Vec<Task>),
    /// Filter label applied to the list.
    FilterLabel(TasksFilterType),
    /// Add-task screen opened.
    AddTask,
    /// Detail screen opened for a task.
    TaskDetails(TaskId),
    /// Completion confirmed.
    MarkedComplete,
    /// Reactivation confirmed.
    MarkedActive,
    /// Clearing of completed tasks confirmed.
    CompletedCleared,
    /// Load failure reported.
    LoadingError,
    /// Saved-task message shown.
    SavedMessage,
}

/// View that records every signal in arrival order.
#[derive(Debug)]
pub struct RecordingView {
    active: AtomicBool,
    signals: Mutex<Vec<ViewSignal>>,
}

impl RecordingView {
    fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
            signals: Mutex::new(Vec::new()),
        }
    }

    /// Marks the view as detached.
    pub fn detach(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Returns a snapshot of the recorded signals.
    pub fn signals(&self) -> Vec<ViewSignal> {
        self.signals
            .lock()
            .map(|signals| signals.clone())
            .unwrap_or_default()
    }

    fn record(&self, signal: ViewSignal) {
        if let Ok(mut signals) = self.signals.lock() {
            signals.push(signal);
        }
    }
}

impl TasksView for RecordingView {
    fn set_loading_indicator(&self, active: bool) {
        self.record(ViewSignal::LoadingIndicator(active));
    }

    fn show_tasks(&self, tasks: &[Task]) {
        self.record(ViewSignal::Tasks(tasks.to_vec()));
    }

    fn show_filter_label(&self, filter: TasksFilterType) {
        self.record(ViewSignal::FilterLabel(filter));
    }

    fn show_add_task(&self) {
        self.record(ViewSignal::AddTask);
    }

    fn show_task_details_ui(&self, task_id: TaskId) {
        self.record(ViewSignal::TaskDetails(task_id));
    }

    fn show_task_marked_complete(&self) {
        self.record(ViewSignal::MarkedComplete);
    }

    fn show_task_marked_active(&self) {
        self.record(ViewSignal::MarkedActive);
    }

    fn show_completed_tasks_cleared(&self) {
        self.record(ViewSignal::CompletedCleared);
    }

    fn show_loading_tasks_error(&self) {
        self.record(ViewSignal::LoadingError);
    }

    fn show_successfully_saved_message(&self) {
        self.record(ViewSignal::SavedMessage);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub data_source: Arc<InMemoryTasksDataSource>,
    pub presenter: TestPresenter,
}

impl TaskListWorld {
    /// Creates a world over `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let data_source = Arc::new(InMemoryTasksDataSource::with_tasks(tasks));
        let presenter = TasksPresenter::new(
            UseCaseHandler::inline(),
            Arc::new(RecordingView::new()),
            TasksUseCases::new(&data_source),
        );
        Self {
            data_source,
            presenter,
        }
    }

    /// Returns the view driven by the presenter.
    #[must_use]
    pub fn view(&self) -> &RecordingView {
        self.presenter.view()
    }

    /// Returns the tasks of the most recent `show_tasks` signal.
    #[must_use]
    pub fn last_shown_tasks(&self) -> Option<Vec<Task>> {
        self.view()
            .signals()
            .into_iter()
            .rev()
            .find_map(|signal| match signal {
                ViewSignal::Tasks(tasks) => Some(tasks),
                _ => None,
            })
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::with_tasks(Vec::new())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
