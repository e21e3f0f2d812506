//! Run lookup materialization plans against the database.

pub mod error;
pub mod metrics;
pub mod query;
