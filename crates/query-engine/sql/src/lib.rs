//! SQL AST and rendering for the lookup materialization statements.

pub mod sql;
