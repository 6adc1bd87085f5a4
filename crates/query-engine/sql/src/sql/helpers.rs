//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;
use super::string::SQL;

/// The `%` wildcard of a LIKE pattern.
pub const LIKE_WILDCARD: &str = "%";

// Leaves //

/// A reference to a column.
pub fn make_column(name: String) -> Expression {
    Expression::ColumnReference(ColumnName(name))
}

/// A single-quoted string literal.
pub fn make_string(value: String) -> Expression {
    Expression::Value(Value::String(value))
}

/// The `'%'` literal used when building LIKE patterns around column values.
pub fn like_wildcard() -> Expression {
    make_string(LIKE_WILDCARD.to_string())
}

// Compound expressions //

/// Join expressions with a combinator, or nothing if there is nothing to join.
pub fn make_group(combinator: Combinator, expressions: Vec<Expression>) -> Option<Expression> {
    if expressions.is_empty() {
        None
    } else {
        Some(Expression::Group {
            combinator,
            expressions,
        })
    }
}

/// Negate an expression.
pub fn make_not(expression: Expression) -> Expression {
    Expression::Not(Box::new(expression))
}

// Rendering //

/// Convert an expression to a SQL string.
pub fn expression_to_sql(expression: &Expression) -> SQL {
    let mut sql = SQL::new();
    expression.to_sql(&mut sql);
    sql
}
