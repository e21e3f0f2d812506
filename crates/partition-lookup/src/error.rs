//! The error surface of the lookup operations.

use thiserror::Error;

use query_engine_execution::error::QueryExecutionError;
use query_engine_sql::sql::ast::InvalidIdentifier;

/// The single error kind raised by lookup operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A point query failed. Its transaction was rolled back.
    #[error("point query operation failed: {0}")]
    PointQuery(#[source] QueryExecutionError),
    /// A range query failed. Its transaction was rolled back.
    #[error("range query operation failed: {0}")]
    RangeQuery(#[source] QueryExecutionError),
    /// A caller-supplied table name failed validation. Nothing was sent to
    /// the database.
    #[error("invalid table name: {0}")]
    InvalidTableName(#[from] InvalidIdentifier),
}
