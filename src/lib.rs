//! Taskdeck: presentation core for a to-do list.
//!
//! This crate provides the task model, filtering, storage contracts and the
//! presenter that turns user intents into view signals. Rendering and
//! navigation belong to the host; the crate only talks to them through
//! the [`tasks::ports::TasksView`] trait.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Task values and filters with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and rendering
//! - **Adapters**: In-memory, JSON file and caching data sources
//!
//! # Modules
//!
//! - [`tasks`]: Task list domain, use cases and presenter
//! - [`telemetry`]: Logging setup

pub mod tasks;
pub mod telemetry;
