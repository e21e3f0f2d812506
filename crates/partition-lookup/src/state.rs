//! Transient state shared by the lookup operations.
//!
//! This is initialized on startup.

use thiserror::Error;

use query_engine_execution::metrics;

/// State threaded through every lookup operation.
#[derive(Debug, Clone)]
pub struct State {
    pub metrics: metrics::Metrics,
}

/// Initialize the metrics and wrap them inside a State.
pub fn create_state(
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let metrics =
        metrics::Metrics::initialize(metrics_registry).map_err(InitializationError::MetricsError)?;

    Ok(State { metrics })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
