//! Task list management.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Single-operation use cases in [`usecases`]
//! - Use case dispatch in [`execution`]
//! - Presentation logic in [`presenter`]

pub mod adapters;
pub mod domain;
pub mod execution;
pub mod ports;
pub mod presenter;
pub mod usecases;
