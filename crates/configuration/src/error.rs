//! Errors that occur during the configuration lifecycle.

use thiserror::Error;

use crate::environment;

/// Occurs when resolving connection settings into a runtime configuration.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("missing environment variable when processing settings: {variable}")]
    MissingEnvironmentVariable {
        variable: String,
        #[source]
        error: environment::Error,
    },
}
