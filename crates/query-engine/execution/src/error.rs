//! Errors raised while executing a statement batch.

use thiserror::Error;

/// A statement batch failed. The transaction was rolled back before this
/// was returned, so the database is as it was before the call.
#[derive(Debug, Error)]
#[error("query execution failed: {0}")]
pub struct QueryExecutionError(#[from] pub sqlx::Error);
