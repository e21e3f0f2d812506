//! Point and range lookups over a timestamp-partitioned Postgres table.
//!
//! Each operation rebuilds a caller-named result table from the distinct
//! partition rows matching a `created_utc` filter, ordered ascending, inside
//! a single transaction on a caller-owned connection. Either the result
//! table is fully replaced, or the transaction is rolled back and the
//! database is left as it was.

pub mod error;
pub mod query;
pub mod state;

pub use error::DatabaseError;
pub use query::{point_query, range_query};
pub use state::{create_state, InitializationError, State};
