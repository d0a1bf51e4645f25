//! Step definitions for task list scenarios.

mod given;
mod then;
pub mod world;
