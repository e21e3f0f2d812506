//! Type definitions of a SQL AST representation.

use thiserror::Error;

/// Postgres truncates identifiers beyond this many bytes.
const IDENTIFIER_MAX_BYTES: usize = 63;

/// A single SQL statement in a materialization batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `DROP TABLE IF EXISTS` statement
    DropTableIfExists { table: TableName, cascade: bool },
    /// A `CREATE TABLE .. AS <select>` statement
    CreateTableAs { table: TableName, select: Select },
}

/// A WITH clause
#[derive(Debug, Clone, PartialEq)]
pub struct With {
    pub common_table_expressions: Vec<CommonTableExpression>,
}

/// A single Common Table Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpression {
    pub alias: TableAlias,
    pub select: Select,
}

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub with: With,
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub order_by: OrderBy,
}

/// A select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectList {
    SelectStar,
    SelectStarDistinct,
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub struct From {
    pub reference: TableReference,
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: ColumnName,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// AND clause
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// A binary operation on two scalar expressions
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// A column reference
    ColumnReference(ColumnName),
    /// An irreducible value
    Value(Value),
}

/// A binary comparison operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    GreaterThan,
    LessThanOrEqual,
}

/// An irreducible value. Rendered as a bound parameter, never inlined into
/// the statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int8(i64),
    Bool(bool),
}

/// A database table name, validated on construction.
///
/// Construction is the only way caller-supplied identifiers enter the SQL
/// layer, so the check here is what stands between user input and the
/// generated DDL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    /// Validate a table name: an ASCII letter or underscore followed by
    /// letters, digits or underscores, at most 63 bytes. Rendering always
    /// double-quotes the name on top of this.
    pub fn new(name: &str) -> Result<TableName, InvalidIdentifier> {
        let mut chars = name.chars();
        let head_is_valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let tail_is_valid = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if head_is_valid && tail_is_valid && name.len() <= IDENTIFIER_MAX_BYTES {
            Ok(TableName(name.to_string()))
        } else {
            Err(InvalidIdentifier(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An identifier was rejected by [`TableName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid Postgres identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// aliases that we give to relations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableAlias {
    pub name: String,
}

/// A reference to a table. Used when we want to query it,
/// for example in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableReference {
    /// refers to a db table object name
    DBTable(TableName),
    /// refers to an alias we created
    AliasedTable(TableAlias),
}

/// A database table's column name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_accepts_ordinary_identifiers() {
        for name in ["events", "events_2024", "_scratch", "r1"] {
            assert_eq!(TableName::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn it_rejects_hostile_or_malformed_identifiers() {
        for name in [
            "",
            "1events",
            "events; DROP TABLE users",
            "events\"",
            "events table",
            "events.partitioned",
        ] {
            assert_eq!(
                TableName::new(name),
                Err(InvalidIdentifier(name.to_string()))
            );
        }
    }

    #[test]
    fn it_enforces_the_postgres_length_limit() {
        let just_fits = "x".repeat(63);
        let too_long = "x".repeat(64);
        assert!(TableName::new(&just_fits).is_ok());
        assert!(TableName::new(&too_long).is_err());
    }
}
