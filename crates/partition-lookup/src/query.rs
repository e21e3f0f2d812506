//! The two lookup operations.

use sqlx::PgConnection;
use tracing::{info_span, Instrument};

use query_engine_execution::query::execute;
use query_engine_sql::sql::ast::{InvalidIdentifier, TableName};
use query_engine_sql::sql::execution_plan::ExecutionPlan;
use query_engine_sql::sql::helpers;

use crate::error::DatabaseError;
use crate::state::State;

/// Rebuild `result_table` with the distinct rows of `partition_table` whose
/// `created_utc` equals the given timestamp, ordered ascending.
///
/// The connection is caller-owned; this function only runs one transaction
/// on it. A point query matching no rows succeeds and leaves an empty
/// result table.
pub async fn point_query(
    state: &State,
    connection: &mut PgConnection,
    partition_table: &str,
    created_utc: i64,
    result_table: &str,
) -> Result<(), DatabaseError> {
    // Plan the lookup.
    let plan = async {
        match plan_point_lookup(partition_table, created_utc, result_table) {
            Ok(plan) => Ok(plan),
            Err(err) => {
                tracing::error!("{}", err);
                Err(DatabaseError::InvalidTableName(err))
            }
        }
    }
    .instrument(info_span!("Plan point lookup"))
    .await?;

    // Execute the lookup.
    execute(connection, &state.metrics, plan)
        .instrument(info_span!("Execute point lookup"))
        .await
        .map_err(|err| {
            tracing::error!("{}", err);
            DatabaseError::PointQuery(err)
        })?;

    state.metrics.record_successful_point_lookup();

    Ok(())
}

/// Rebuild `result_table` with the distinct rows of `partition_table` whose
/// `created_utc` lies in `(min_utc, max_utc]`, ordered ascending.
///
/// The lower bound is exclusive and the upper bound inclusive, so
/// `min_utc == max_utc` yields an empty result table.
pub async fn range_query(
    state: &State,
    connection: &mut PgConnection,
    partition_table: &str,
    min_utc: i64,
    max_utc: i64,
    result_table: &str,
) -> Result<(), DatabaseError> {
    // Plan the lookup.
    let plan = async {
        match plan_range_lookup(partition_table, min_utc, max_utc, result_table) {
            Ok(plan) => Ok(plan),
            Err(err) => {
                tracing::error!("{}", err);
                Err(DatabaseError::InvalidTableName(err))
            }
        }
    }
    .instrument(info_span!("Plan range lookup"))
    .await?;

    // Execute the lookup.
    execute(connection, &state.metrics, plan)
        .instrument(info_span!("Execute range lookup"))
        .await
        .map_err(|err| {
            tracing::error!("{}", err);
            DatabaseError::RangeQuery(err)
        })?;

    state.metrics.record_successful_range_lookup();

    Ok(())
}

fn plan_point_lookup(
    partition_table: &str,
    created_utc: i64,
    result_table: &str,
) -> Result<ExecutionPlan, InvalidIdentifier> {
    let partition_table = TableName::new(partition_table)?;
    let result_table = TableName::new(result_table)?;
    Ok(helpers::point_lookup(
        &partition_table,
        created_utc,
        &result_table,
    ))
}

fn plan_range_lookup(
    partition_table: &str,
    min_utc: i64,
    max_utc: i64,
    result_table: &str,
) -> Result<ExecutionPlan, InvalidIdentifier> {
    let partition_table = TableName::new(partition_table)?;
    let result_table = TableName::new(result_table)?;
    Ok(helpers::range_lookup(
        &partition_table,
        min_utc,
        max_utc,
        &result_table,
    ))
}
