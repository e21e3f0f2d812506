//! Connection configuration for lookup callers.
//!
//! The library itself never opens a connection; callers resolve these
//! settings into a 'Configuration' at startup and own the connection they
//! build from it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ConnectionUri, Secret};

pub const DEFAULT_CONNECTION_URI_VARIABLE: &str = "PARTITION_LOOKUP_DATABASE_URL";

/// Database connection settings.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    /// Connection string for a Postgres-compatible database.
    pub connection_uri: ConnectionUri,
}

impl DatabaseConnectionSettings {
    pub fn empty() -> Self {
        Self {
            connection_uri: ConnectionUri(Secret::FromEnvironment {
                variable: DEFAULT_CONNECTION_URI_VARIABLE.into(),
            }),
        }
    }
}

/// The 'Configuration' type collects all the information necessary to open
/// the database connection lookup operations run on.
///
/// 'DatabaseConnectionSettings' stays serializable and may defer its secrets
/// to environment variables; values of this type are produced from it with
/// 'make_runtime_configuration', which is where those secrets get resolved.
#[derive(Debug)]
pub struct Configuration {
    pub connection_uri: String,
}

/// Resolve connection settings against an environment to produce the
/// runtime configuration.
pub fn make_runtime_configuration(
    settings: &DatabaseConnectionSettings,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let connection_uri = match &settings.connection_uri {
        ConnectionUri(Secret::Plain(uri)) => uri.clone(),
        ConnectionUri(Secret::FromEnvironment { variable }) => {
            environment.read(variable).map_err(|error| {
                MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                    variable: variable.to_string(),
                    error,
                }
            })?
        }
    };
    Ok(Configuration { connection_uri })
}
