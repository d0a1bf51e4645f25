//! Single-operation use case contract.

use async_trait::async_trait;

use crate::tasks::ports::DataSourceResult;

/// A named operation with one request and one response.
///
/// Use cases own `'static` state so a scheduler may run them on another
/// task; the handler hands the response back to the caller.
#[async_trait]
pub trait UseCase: Send + Sync + 'static {
    /// Input of the operation.
    type Request: Send + 'static;
    /// Output of the operation.
    type Response: Send + 'static;

    /// Runs the operation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::tasks::ports::DataNotAvailable`] when the underlying
    /// data source fails.
    async fn execute(&self, request: Self::Request) -> DataSourceResult<Self::Response>;
}
