//! Execute a materialization plan against the database.

use sqlx::Connection;
use tracing::{info_span, Instrument};

use query_engine_sql::sql;

use crate::error::QueryExecutionError;
use crate::metrics;

/// Run all of a plan's statements on the given connection inside a single
/// transaction.
///
/// Commits once every statement has succeeded. On the first failure the
/// transaction is rolled back and the error that aborted the batch is
/// returned; a failure of the rollback itself is logged but never masks
/// the original error. No retries.
pub async fn execute(
    connection: &mut sqlx::PgConnection,
    metrics: &metrics::Metrics,
    plan: sql::execution_plan::ExecutionPlan,
) -> Result<(), QueryExecutionError> {
    let mut transaction = connection.begin().await?;

    for statement in plan.statements_sql() {
        tracing::debug!(
            generated_sql = %sqlformat::format(
                &statement.sql,
                &sqlformat::QueryParams::None,
                sqlformat::FormatOptions::default(),
            ),
            params = ?statement.params,
        );

        let executed = build_query_with_params(&statement)
            .execute(&mut *transaction)
            .instrument(info_span!("Execute statement"))
            .await;

        match executed {
            Ok(_) => metrics.record_statement_executed(),
            Err(err) => {
                metrics.record_rollback();
                if let Err(rollback_err) = transaction.rollback().await {
                    tracing::error!("rollback failed: {}", rollback_err);
                }
                return Err(QueryExecutionError(err));
            }
        }
    }

    transaction.commit().await?;

    Ok(())
}

/// Create a SQLx query based on our SQL statement and bind its parameters.
fn build_query_with_params(
    statement: &sql::string::SQL,
) -> sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments> {
    statement
        .params
        .iter()
        .fold(
            sqlx::query(statement.sql.as_str()),
            |query, param| match param {
                sql::string::Param::Int8(value) => query.bind(*value),
            },
        )
}
