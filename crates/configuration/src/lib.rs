pub mod configuration;
pub mod environment;
pub mod error;
pub mod values;

pub use configuration::{
    make_runtime_configuration, Configuration, DatabaseConnectionSettings,
    DEFAULT_CONNECTION_URI_VARIABLE,
};
pub use values::{ConnectionUri, Secret};
