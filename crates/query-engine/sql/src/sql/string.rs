//! Type definitions of a low-level SQL string representation.

/// A SQL predicate text built up from syntax, identifiers and inline literals.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl SQL {
    pub fn new() -> SQL {
        SQL { sql: String::new() }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Identifiers are written bare.
    pub fn append_identifier(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Literals are inlined between single quotes. Quotes inside `literal` are not escaped, so
    /// callers must only pass trusted values.
    pub fn append_string_literal(&mut self, literal: &str) {
        self.sql.push('\'');
        self.sql.push_str(literal);
        self.sql.push('\'');
    }
}
