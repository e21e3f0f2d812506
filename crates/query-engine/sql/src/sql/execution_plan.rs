//! The statements run for a single lookup operation.

use super::ast;
use super::string::SQL;

/// The ordered statements that rebuild one result table.
///
/// Statements are rendered separately because parameterized statements are
/// sent to Postgres one at a time; the executor supplies atomicity by
/// running the whole batch inside a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub statements: Vec<ast::Statement>,
}

impl ExecutionPlan {
    /// Render every statement to its SQL text and bound parameters.
    pub fn statements_sql(&self) -> Vec<SQL> {
        self.statements.iter().map(statement_to_sql).collect()
    }
}

/// Render a single statement.
pub fn statement_to_sql(statement: &ast::Statement) -> SQL {
    let mut sql = SQL::new();
    statement.to_sql(&mut sql);
    sql
}
