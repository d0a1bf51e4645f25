//! Caching adapter composing local and remote task sources.

mod repository;

pub use repository::TasksRepository;
