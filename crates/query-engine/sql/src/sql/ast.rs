//! Type definitions of a SQL predicate AST representation.

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A parenthesized list of expressions joined by a combinator
    Group {
        combinator: Combinator,
        expressions: Vec<Expression>,
    },
    /// A negated expression, written with the `!` marker
    Not(Box<Expression>),
    /// A binary operation on two scalar expression
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// A binary operation on a scalar expression and an array of scalar expressions
    BinaryArrayOperation {
        left: Box<Expression>,
        operator: BinaryArrayOperator,
        right: Vec<Expression>,
    },
    /// A range check on a scalar expression
    Between {
        expression: Box<Expression>,
        operator: BetweenOperator,
        low: Box<Expression>,
        high: Box<Expression>,
    },
    /// An unary operation on a scalar expression
    UnaryOperation {
        expression: Box<Expression>,
        operator: UnaryOperator,
    },
    /// String concatenation with `||`
    Concat(Vec<Expression>),
    /// A column reference
    ColumnReference(ColumnName),
    /// An irreducible value
    Value(Value),
}

/// The joiner of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

/// An unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    IsNull,
    IsNotNull,
}

/// A binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    Like,
    NotLike,
}

/// A binary operator when the rhs is an array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryArrayOperator {
    In,
    NotIn,
}

/// A range operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetweenOperator {
    Between,
    NotBetween,
}

/// A column name. This is written out as given, without quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

/// Value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(serde_json::Number),
    /// A single-quoted string. The contents are not escaped.
    String(String),
}
