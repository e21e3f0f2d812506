//! Type definitions of a low-level SQL string representation.

/// A statement's SQL text together with the parameters bound to its `$n`
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Param>,
}

/// A parameter for a parameterized statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// An eight-byte signed integer. Timestamp bounds are the only values
    /// we bind.
    Int8(i64),
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
        }
    }

    /// Append regular SQL syntax such as a keyword or punctuation.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a double-quoted identifier. Names are validated when they are
    /// constructed; quoting keeps casing and reserved words out of the
    /// picture.
    pub fn append_identifier(&mut self, name: &str) {
        self.sql.push('"');
        self.sql.push_str(name);
        self.sql.push('"');
    }

    /// Append a `$n` placeholder and record the parameter to bind to it.
    pub fn append_param(&mut self, param: Param) {
        self.params.push(param);
        self.sql.push_str(format!("${}", self.params.len()).as_str());
    }
}
