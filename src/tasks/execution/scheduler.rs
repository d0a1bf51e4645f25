//! Strategies deciding where use case jobs run.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use tokio::runtime::{Handle, TryCurrentError};

/// A type-erased unit of work produced by the use case handler.
pub type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Execution strategy injected into a [`super::UseCaseHandler`].
///
/// `schedule` returns once the job has been handed off. The handler waits
/// for the job's result separately, so a scheduler may either run the job
/// to completion or push it elsewhere.
#[async_trait]
pub trait UseCaseScheduler: Send + Sync {
    /// Runs or dispatches `job`.
    async fn schedule(&self, job: Job);
}

/// Runs every job to completion on the calling task.
///
/// Results are available as soon as `schedule` returns, which keeps tests
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScheduler;

#[async_trait]
impl UseCaseScheduler for InlineScheduler {
    async fn schedule(&self, job: Job) {
        job.await;
    }
}

/// Spawns every job onto a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler spawning onto `handle`.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler for the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns [`TryCurrentError`] when called outside a tokio runtime.
    pub fn current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

#[async_trait]
impl UseCaseScheduler for TokioScheduler {
    async fn schedule(&self, job: Job) {
        let _detached = self.handle.spawn(job);
    }
}
