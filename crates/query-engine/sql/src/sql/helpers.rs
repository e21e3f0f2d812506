//! Helpers for building sql::ast types in the shapes this engine emits.

use super::ast::*;
use super::execution_plan::ExecutionPlan;

/// The timestamp column every partition table is keyed on.
pub const CREATED_UTC_COLUMN: &str = "created_utc";

/// Alias for the CTE holding the filtered rows before the final ordering.
const FILTERED_ROWS_ALIAS: &str = "filtered_rows";

// Empty clauses //

/// An empty `WITH` clause.
pub fn empty_with() -> With {
    With {
        common_table_expressions: vec![],
    }
}

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// Expressions //

/// The timestamp column as an expression.
fn timestamp_column() -> Expression {
    Expression::ColumnReference(ColumnName(CREATED_UTC_COLUMN.to_string()))
}

/// Compare the timestamp column against a bound value.
fn compare_timestamp(operator: BinaryOperator, bound: i64) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(timestamp_column()),
        operator,
        right: Box::new(Expression::Value(Value::Int8(bound))),
    }
}

// Plans //

/// `SELECT DISTINCT * FROM <partition_table> WHERE <filter>`
fn distinct_rows_matching(partition_table: &TableName, filter: Expression) -> Select {
    Select {
        with: empty_with(),
        select_list: SelectList::SelectStarDistinct,
        from: From {
            reference: TableReference::DBTable(partition_table.clone()),
        },
        where_: Where(filter),
        order_by: empty_order_by(),
    }
}

/// Wrap the filtering select in a CTE and select everything back out of it
/// ordered ascending by the timestamp column.
fn ordered_by_timestamp(filtered: Select) -> Select {
    let cte_alias = TableAlias {
        name: FILTERED_ROWS_ALIAS.to_string(),
    };
    Select {
        with: With {
            common_table_expressions: vec![CommonTableExpression {
                alias: cte_alias.clone(),
                select: filtered,
            }],
        },
        select_list: SelectList::SelectStar,
        from: From {
            reference: TableReference::AliasedTable(cte_alias),
        },
        where_: Where(empty_where()),
        order_by: OrderBy {
            elements: vec![OrderByElement {
                target: ColumnName(CREATED_UTC_COLUMN.to_string()),
                direction: OrderByDirection::Asc,
            }],
        },
    }
}

/// Drop the result table and recreate it from the filtered rows. The drop
/// and the create run inside one transaction, so a failed call leaves the
/// previous result table in place.
fn rebuild_result_table(result_table: &TableName, filtered: Select) -> ExecutionPlan {
    ExecutionPlan {
        statements: vec![
            Statement::DropTableIfExists {
                table: result_table.clone(),
                cascade: true,
            },
            Statement::CreateTableAs {
                table: result_table.clone(),
                select: ordered_by_timestamp(filtered),
            },
        ],
    }
}

/// Plan a point lookup: rebuild `result_table` from the distinct rows of
/// `partition_table` whose timestamp equals `created_utc`.
pub fn point_lookup(
    partition_table: &TableName,
    created_utc: i64,
    result_table: &TableName,
) -> ExecutionPlan {
    rebuild_result_table(
        result_table,
        distinct_rows_matching(
            partition_table,
            compare_timestamp(BinaryOperator::Equals, created_utc),
        ),
    )
}

/// Plan a range lookup: rebuild `result_table` from the distinct rows of
/// `partition_table` with `min_utc < created_utc <= max_utc`. The lower
/// bound is exclusive and the upper bound inclusive.
pub fn range_lookup(
    partition_table: &TableName,
    min_utc: i64,
    max_utc: i64,
    result_table: &TableName,
) -> ExecutionPlan {
    let filter = Expression::And {
        left: Box::new(compare_timestamp(BinaryOperator::GreaterThan, min_utc)),
        right: Box::new(compare_timestamp(BinaryOperator::LessThanOrEqual, max_utc)),
    };
    rebuild_result_table(result_table, distinct_rows_matching(partition_table, filter))
}
