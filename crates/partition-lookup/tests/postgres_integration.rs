//! Database-backed tests for the lookup operations.
//!
//! These need a running Postgres. Point `PARTITION_LOOKUP_DATABASE_URL` at
//! it and run `cargo test -- --ignored`.

use anyhow::Context;
use sqlx::{Connection, PgConnection, Row};

use partition_lookup::{create_state, point_query, range_query, State};
use partition_lookup_configuration as configuration;

async fn connect() -> anyhow::Result<PgConnection> {
    let config = configuration::make_runtime_configuration(
        &configuration::DatabaseConnectionSettings::empty(),
        configuration::environment::ProcessEnvironment,
    )
    .context("these tests need PARTITION_LOOKUP_DATABASE_URL to be set")?;

    Ok(PgConnection::connect(&config.connection_uri).await?)
}

fn fresh_state() -> State {
    let mut registry = prometheus::Registry::new();
    create_state(&mut registry).unwrap()
}

/// Create a partition-table stand-in holding rows with `created_utc` in
/// {100, 100, 200, 300}, the duplicate being a full-row duplicate.
async fn seed_events(connection: &mut PgConnection, table: &str) -> anyhow::Result<()> {
    sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE"))
        .execute(&mut *connection)
        .await?;
    sqlx::query(&format!(
        "CREATE TABLE {table} (created_utc bigint NOT NULL, payload text)"
    ))
    .execute(&mut *connection)
    .await?;
    sqlx::query(&format!(
        "INSERT INTO {table} VALUES (100, 'a'), (100, 'a'), (200, 'b'), (300, 'c')"
    ))
    .execute(&mut *connection)
    .await?;
    Ok(())
}

/// The result tables are written in ascending `created_utc` order, so read
/// them back without re-sorting.
async fn created_utcs(connection: &mut PgConnection, table: &str) -> anyhow::Result<Vec<i64>> {
    let rows = sqlx::query(&format!("SELECT created_utc FROM {table}"))
        .fetch_all(connection)
        .await?;
    Ok(rows.iter().map(|row| row.get(0)).collect())
}

async fn table_exists(connection: &mut PgConnection, table: &str) -> anyhow::Result<bool> {
    let row = sqlx::query("SELECT to_regclass($1) IS NOT NULL")
        .bind(table)
        .fetch_one(connection)
        .await?;
    Ok(row.get(0))
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn point_query_collapses_duplicates() -> anyhow::Result<()> {
    let mut connection = connect().await?;
    let state = fresh_state();
    seed_events(&mut connection, "pl_test_events_point").await?;

    point_query(
        &state,
        &mut connection,
        "pl_test_events_point",
        100,
        "pl_test_r1",
    )
    .await?;

    assert_eq!(
        created_utcs(&mut connection, "pl_test_r1").await?,
        vec![100]
    );
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn point_query_with_no_match_leaves_an_empty_table() -> anyhow::Result<()> {
    let mut connection = connect().await?;
    let state = fresh_state();
    seed_events(&mut connection, "pl_test_events_nomatch").await?;

    point_query(
        &state,
        &mut connection,
        "pl_test_events_nomatch",
        999,
        "pl_test_r_empty",
    )
    .await?;

    assert!(table_exists(&mut connection, "pl_test_r_empty").await?);
    assert_eq!(
        created_utcs(&mut connection, "pl_test_r_empty").await?,
        Vec::<i64>::new()
    );
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn range_query_excludes_the_lower_bound_and_includes_the_upper() -> anyhow::Result<()> {
    let mut connection = connect().await?;
    let state = fresh_state();
    seed_events(&mut connection, "pl_test_events_range").await?;

    range_query(
        &state,
        &mut connection,
        "pl_test_events_range",
        100,
        300,
        "pl_test_r2",
    )
    .await?;

    assert_eq!(
        created_utcs(&mut connection, "pl_test_r2").await?,
        vec![200, 300]
    );
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn range_query_with_equal_bounds_is_empty() -> anyhow::Result<()> {
    let mut connection = connect().await?;
    let state = fresh_state();
    seed_events(&mut connection, "pl_test_events_equal").await?;

    range_query(
        &state,
        &mut connection,
        "pl_test_events_equal",
        200,
        200,
        "pl_test_r_equal",
    )
    .await?;

    assert!(table_exists(&mut connection, "pl_test_r_equal").await?);
    assert_eq!(
        created_utcs(&mut connection, "pl_test_r_equal").await?,
        Vec::<i64>::new()
    );
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn repeating_an_operation_replaces_rather_than_appends() -> anyhow::Result<()> {
    let mut connection = connect().await?;
    let state = fresh_state();
    seed_events(&mut connection, "pl_test_events_idem").await?;

    for _ in 0..2 {
        range_query(
            &state,
            &mut connection,
            "pl_test_events_idem",
            0,
            300,
            "pl_test_r_idem",
        )
        .await?;
    }

    assert_eq!(
        created_utcs(&mut connection, "pl_test_r_idem").await?,
        vec![100, 200, 300]
    );
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn a_failed_query_leaves_the_result_table_untouched() -> anyhow::Result<()> {
    let mut connection = connect().await?;
    let state = fresh_state();
    seed_events(&mut connection, "pl_test_events_rollback").await?;

    // first call populates the result table
    point_query(
        &state,
        &mut connection,
        "pl_test_events_rollback",
        100,
        "pl_test_r_rollback",
    )
    .await?;

    // second call targets a partition table that does not exist; the drop
    // inside the transaction must be rolled back
    let result = point_query(
        &state,
        &mut connection,
        "pl_test_no_such_table",
        100,
        "pl_test_r_rollback",
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        created_utcs(&mut connection, "pl_test_r_rollback").await?,
        vec![100]
    );
    Ok(())
}
