//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::string::SQL;

// Convert to SQL strings

impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::Group {
                combinator,
                expressions,
            } => {
                sql.append_syntax("( ");
                for (index, expression) in expressions.iter().enumerate() {
                    if index > 0 {
                        sql.append_syntax(" ");
                        combinator.to_sql(sql);
                        sql.append_syntax(" ");
                    }
                    // nested groups are set off by an extra space
                    if expression.is_group() {
                        sql.append_syntax(" ");
                    }
                    expression.to_sql(sql);
                }
                sql.append_syntax(" )");
            }
            Expression::Not(expression) => {
                sql.append_syntax("!");
                expression.to_sql(sql);
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::BinaryArrayOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                sql.append_syntax("(");
                for (index, item) in right.iter().enumerate() {
                    if index > 0 {
                        sql.append_syntax(",");
                    }
                    item.to_sql(sql);
                }
                sql.append_syntax(")");
            }
            Expression::Between {
                expression,
                operator,
                low,
                high,
            } => {
                expression.to_sql(sql);
                operator.to_sql(sql);
                low.to_sql(sql);
                sql.append_syntax(" AND ");
                high.to_sql(sql);
            }
            Expression::UnaryOperation {
                expression,
                operator,
            } => {
                expression.to_sql(sql);
                operator.to_sql(sql);
            }
            Expression::Concat(expressions) => {
                for (index, expression) in expressions.iter().enumerate() {
                    if index > 0 {
                        sql.append_syntax(" || ");
                    }
                    expression.to_sql(sql);
                }
            }
            Expression::ColumnReference(column_name) => column_name.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
        }
    }

    /// Is this a group, possibly negated?
    fn is_group(&self) -> bool {
        match self {
            Expression::Group { .. } => true,
            Expression::Not(expression) => expression.is_group(),
            _ => false,
        }
    }
}

impl Combinator {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            Combinator::And => sql.append_syntax("and"),
            Combinator::Or => sql.append_syntax("or"),
        }
    }
}

impl UnaryOperator {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            UnaryOperator::IsNull => sql.append_syntax(" IS NULL"),
            UnaryOperator::IsNotNull => sql.append_syntax(" IS NOT NULL"),
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(self, sql: &mut SQL) {
        let op = match self {
            BinaryOperator::Equals => "=",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqualTo => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqualTo => ">=",
            BinaryOperator::Like => "LIKE",
            BinaryOperator::NotLike => "NOT LIKE",
        };
        sql.append_syntax(" ");
        sql.append_syntax(op);
        sql.append_syntax(" ");
    }
}

impl BinaryArrayOperator {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            BinaryArrayOperator::In => sql.append_syntax(" IN "),
            BinaryArrayOperator::NotIn => sql.append_syntax(" NOT IN "),
        }
    }
}

impl BetweenOperator {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            BetweenOperator::Between => sql.append_syntax(" BETWEEN "),
            BetweenOperator::NotBetween => sql.append_syntax(" NOT BETWEEN "),
        }
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnName(name) = self;
        sql.append_identifier(name);
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::Bool(true) => sql.append_syntax("true"),
            Value::Bool(false) => sql.append_syntax("false"),
            Value::Number(number) => sql.append_syntax(&number.to_string()),
            Value::String(string) => sql.append_string_literal(string),
        }
    }
}
