//! Error types for tasks domain parsing.

use thiserror::Error;

/// Error returned while parsing a filter from configuration or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tasks filter: {0}")]
pub struct ParseFilterError(pub String);
