//! Use case dispatch.
//!
//! The presenter never picks a runtime itself: it receives a
//! [`UseCaseHandler`] built around an injected [`UseCaseScheduler`].

mod handler;
mod scheduler;

pub use handler::UseCaseHandler;
pub use scheduler::{InlineScheduler, Job, TokioScheduler, UseCaseScheduler};
