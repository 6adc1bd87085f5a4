//! Compile a single comparison rule into a predicate fragment.

use querybuilder_models as models;

use query_engine_sql::sql;

use super::error::Error;
use super::helpers::Comparison;
use super::values;

/// The comparison operators a rule can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    Contains,
    BeginsWith,
    EndsWith,
    NotContains,
    NotBeginsWith,
    NotEndsWith,
    IsNull,
    NotNull,
    In,
    NotIn,
    Between,
    NotBetween,
}

impl Operator {
    /// Parse an operator tag as sent by the query builder. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Operator> {
        match tag {
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Neq),
            "<" => Some(Operator::Lt),
            ">" => Some(Operator::Gt),
            "<=" => Some(Operator::Lte),
            ">=" => Some(Operator::Gte),
            "contains" => Some(Operator::Contains),
            "beginsWith" => Some(Operator::BeginsWith),
            "endsWith" => Some(Operator::EndsWith),
            "doesNotContain" => Some(Operator::NotContains),
            "doesNotBeginWith" => Some(Operator::NotBeginsWith),
            "doesNotEndWith" => Some(Operator::NotEndsWith),
            "null" => Some(Operator::IsNull),
            "notNull" => Some(Operator::NotNull),
            "in" => Some(Operator::In),
            "notIn" => Some(Operator::NotIn),
            "between" => Some(Operator::Between),
            "notBetween" => Some(Operator::NotBetween),
            _ => None,
        }
    }

    /// The query builder's tag for this operator.
    pub fn tag(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
            Operator::Contains => "contains",
            Operator::BeginsWith => "beginsWith",
            Operator::EndsWith => "endsWith",
            Operator::NotContains => "doesNotContain",
            Operator::NotBeginsWith => "doesNotBeginWith",
            Operator::NotEndsWith => "doesNotEndWith",
            Operator::IsNull => "null",
            Operator::NotNull => "notNull",
            Operator::In => "in",
            Operator::NotIn => "notIn",
            Operator::Between => "between",
            Operator::NotBetween => "notBetween",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Where the wildcards of a LIKE pattern go.
#[derive(Debug, Clone, Copy)]
struct Pattern {
    leading: bool,
    trailing: bool,
}

const CONTAINS: Pattern = Pattern {
    leading: true,
    trailing: true,
};
const BEGINS_WITH: Pattern = Pattern {
    leading: false,
    trailing: true,
};
const ENDS_WITH: Pattern = Pattern {
    leading: true,
    trailing: false,
};

/// Translate a comparison and its value to a predicate fragment.
pub fn translate_comparison(
    comparison: &Comparison,
    value: &models::Value,
) -> Result<sql::ast::Expression, Error> {
    use sql::ast::{BetweenOperator, BinaryArrayOperator, BinaryOperator, UnaryOperator};

    let column = sql::helpers::make_column(comparison.field.to_string());
    match comparison.operator {
        Operator::Eq => binary(comparison, column, BinaryOperator::Equals, value),
        Operator::Neq => binary(comparison, column, BinaryOperator::NotEquals, value),
        Operator::Lt => binary(comparison, column, BinaryOperator::LessThan, value),
        Operator::Gt => binary(comparison, column, BinaryOperator::GreaterThan, value),
        Operator::Lte => binary(comparison, column, BinaryOperator::LessThanOrEqualTo, value),
        Operator::Gte => binary(comparison, column, BinaryOperator::GreaterThanOrEqualTo, value),
        Operator::Contains => like(comparison, column, BinaryOperator::Like, CONTAINS, value),
        Operator::BeginsWith => like(comparison, column, BinaryOperator::Like, BEGINS_WITH, value),
        Operator::EndsWith => like(comparison, column, BinaryOperator::Like, ENDS_WITH, value),
        Operator::NotContains => like(comparison, column, BinaryOperator::NotLike, CONTAINS, value),
        Operator::NotBeginsWith => {
            like(comparison, column, BinaryOperator::NotLike, BEGINS_WITH, value)
        }
        Operator::NotEndsWith => like(comparison, column, BinaryOperator::NotLike, ENDS_WITH, value),
        // the value of a null check is ignored
        Operator::IsNull => Ok(unary(column, UnaryOperator::IsNull)),
        Operator::NotNull => Ok(unary(column, UnaryOperator::IsNotNull)),
        Operator::In => in_list(comparison, column, BinaryArrayOperator::In, value),
        Operator::NotIn => in_list(comparison, column, BinaryArrayOperator::NotIn, value),
        Operator::Between => between(comparison, column, BetweenOperator::Between, value),
        Operator::NotBetween => between(comparison, column, BetweenOperator::NotBetween, value),
    }
}

fn binary(
    comparison: &Comparison,
    column: sql::ast::Expression,
    operator: sql::ast::BinaryOperator,
    value: &models::Value,
) -> Result<sql::ast::Expression, Error> {
    Ok(sql::ast::Expression::BinaryOperation {
        left: Box::new(column),
        operator,
        right: Box::new(values::translate_comparison_value(comparison, value)?),
    })
}

/// A literal is folded into a single quoted pattern (`'%V%'`); a column reference is
/// concatenated with quoted wildcards (`'%' || V || '%'`).
fn like(
    comparison: &Comparison,
    column: sql::ast::Expression,
    operator: sql::ast::BinaryOperator,
    pattern: Pattern,
    value: &models::Value,
) -> Result<sql::ast::Expression, Error> {
    let text = values::value_text(comparison, value)?;
    let right = match comparison.value_source {
        models::ValueSource::Value => {
            let mut literal = String::new();
            if pattern.leading {
                literal.push_str(sql::helpers::LIKE_WILDCARD);
            }
            literal.push_str(&text);
            if pattern.trailing {
                literal.push_str(sql::helpers::LIKE_WILDCARD);
            }
            sql::helpers::make_string(literal)
        }
        models::ValueSource::Field => {
            let mut parts = vec![];
            if pattern.leading {
                parts.push(sql::helpers::like_wildcard());
            }
            parts.push(sql::helpers::make_column(text));
            if pattern.trailing {
                parts.push(sql::helpers::like_wildcard());
            }
            sql::ast::Expression::Concat(parts)
        }
    };
    Ok(sql::ast::Expression::BinaryOperation {
        left: Box::new(column),
        operator,
        right: Box::new(right),
    })
}

fn unary(column: sql::ast::Expression, operator: sql::ast::UnaryOperator) -> sql::ast::Expression {
    sql::ast::Expression::UnaryOperation {
        expression: Box::new(column),
        operator,
    }
}

fn in_list(
    comparison: &Comparison,
    column: sql::ast::Expression,
    operator: sql::ast::BinaryArrayOperator,
    value: &models::Value,
) -> Result<sql::ast::Expression, Error> {
    let items = values::comma_list(comparison, value)?;
    if items.is_empty() {
        return Err(comparison.malformed_list());
    }
    Ok(sql::ast::Expression::BinaryArrayOperation {
        left: Box::new(column),
        operator,
        right: items
            .into_iter()
            .map(|item| values::translate_list_item(comparison, item))
            .collect(),
    })
}

fn between(
    comparison: &Comparison,
    column: sql::ast::Expression,
    operator: sql::ast::BetweenOperator,
    value: &models::Value,
) -> Result<sql::ast::Expression, Error> {
    let items = values::comma_list(comparison, value)?;
    let [low, high]: [String; 2] = items
        .try_into()
        .map_err(|items: Vec<String>| comparison.malformed_range(items.len()))?;
    Ok(sql::ast::Expression::Between {
        expression: Box::new(column),
        operator,
        low: Box::new(values::translate_list_item(comparison, low)),
        high: Box::new(values::translate_list_item(comparison, high)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn render(rule: &models::Rule) -> Result<String, Error> {
        let comparison = Comparison::from_rule(rule)?;
        let expression = translate_comparison(&comparison, &rule.value)?;
        Ok(sql::helpers::expression_to_sql(&expression).sql)
    }

    fn literal(operator: &str, value: impl Into<models::Value>) -> String {
        render(&models::Rule::leaf("name", operator, value.into())).unwrap()
    }

    fn field(operator: &str, other: &str) -> String {
        render(&models::Rule::field_comparison("name", operator, other)).unwrap()
    }

    #[test]
    fn tags_round_trip() {
        for tag in [
            "=",
            "!=",
            "<",
            ">",
            "<=",
            ">=",
            "contains",
            "beginsWith",
            "endsWith",
            "doesNotContain",
            "doesNotBeginWith",
            "doesNotEndWith",
            "null",
            "notNull",
            "in",
            "notIn",
            "between",
            "notBetween",
        ] {
            assert_eq!(Operator::from_tag(tag).map(Operator::tag), Some(tag));
        }
        assert_eq!(Operator::from_tag("BeginsWith"), None);
    }

    #[test]
    fn comparisons_against_literals() {
        assert_eq!(literal("=", "bob"), "name = 'bob'");
        assert_eq!(literal("!=", "bob"), "name != 'bob'");
        assert_eq!(literal("<", "1969-06-01"), "name < '1969-06-01'");
        assert_eq!(literal(">", "28"), "name > '28'");
        assert_eq!(literal("<=", 3_i64), "name <= 3");
        let fractional = models::Value::Number(serde_json::Number::from_f64(2.5).unwrap());
        assert_eq!(literal(">=", fractional), "name >= 2.5");
        assert_eq!(literal("=", true), "name = true");
    }

    #[test]
    fn comparisons_against_fields() {
        assert_eq!(field("=", "nickname"), "name = nickname");
        assert_eq!(field("!=", "nickname"), "name != nickname");
        assert_eq!(field("<", "nickname"), "name < nickname");
        assert_eq!(field(">=", "nickname"), "name >= nickname");
    }

    #[test]
    fn patterns_against_literals() {
        assert_eq!(literal("contains", "tev"), "name LIKE '%tev%'");
        assert_eq!(literal("beginsWith", "Stev"), "name LIKE 'Stev%'");
        assert_eq!(literal("endsWith", "ve"), "name LIKE '%ve'");
        assert_eq!(literal("doesNotContain", "tev"), "name NOT LIKE '%tev%'");
        assert_eq!(literal("doesNotBeginWith", "Stev"), "name NOT LIKE 'Stev%'");
        assert_eq!(literal("doesNotEndWith", "ve"), "name NOT LIKE '%ve'");
        assert_eq!(literal("contains", 42_i64), "name LIKE '%42%'");
    }

    #[test]
    fn patterns_against_fields() {
        assert_eq!(field("contains", "nick"), "name LIKE '%' || nick || '%'");
        assert_eq!(field("beginsWith", "nick"), "name LIKE nick || '%'");
        assert_eq!(field("endsWith", "nick"), "name LIKE '%' || nick");
        assert_eq!(
            field("doesNotContain", "nick"),
            "name NOT LIKE '%' || nick || '%'"
        );
        assert_eq!(field("doesNotBeginWith", "nick"), "name NOT LIKE nick || '%'");
        assert_eq!(field("doesNotEndWith", "nick"), "name NOT LIKE '%' || nick");
    }

    #[test]
    fn null_checks_ignore_the_value() {
        assert_eq!(literal("null", models::Value::Null), "name IS NULL");
        assert_eq!(literal("notNull", "ignored"), "name IS NOT NULL");
        assert_eq!(field("null", "ignored"), "name IS NULL");
    }

    #[test]
    fn membership() {
        assert_eq!(
            literal("in", vec!["Vai", "Vaughan"]),
            "name IN ('Vai','Vaughan')"
        );
        assert_eq!(literal("in", "Vai, Vaughan"), "name IN ('Vai','Vaughan')");
        assert_eq!(literal("notIn", vec![1_i64, 2]), "name NOT IN ('1','2')");
        assert_eq!(field("in", "a, b"), "name IN (a,b)");
        assert_eq!(field("notIn", "a,b"), "name NOT IN (a,b)");
    }

    #[test]
    fn ranges() {
        assert_eq!(literal("between", "1, 10"), "name BETWEEN '1' AND '10'");
        assert_eq!(
            literal("notBetween", vec![1_i64, 10]),
            "name NOT BETWEEN '1' AND '10'"
        );
        assert_eq!(field("between", "low,high"), "name BETWEEN low AND high");
        assert_eq!(
            field("notBetween", "low,high"),
            "name NOT BETWEEN low AND high"
        );
    }

    #[test]
    fn ranges_need_exactly_two_values() {
        let rule = models::Rule::leaf("age", "between", models::Value::from("1,2,3"));
        assert_eq!(
            render(&rule),
            Err(Error::MalformedRange {
                field: "age".to_string(),
                operator: Operator::Between,
                count: 3,
            })
        );

        let rule = models::Rule::leaf("age", "notBetween", models::Value::from("1"));
        assert_eq!(
            render(&rule),
            Err(Error::MalformedRange {
                field: "age".to_string(),
                operator: Operator::NotBetween,
                count: 1,
            })
        );
    }

    #[test]
    fn empty_lists_are_rejected() {
        let rule = models::Rule::leaf("age", "in", models::Value::List(vec![]));
        assert_eq!(
            render(&rule),
            Err(Error::MalformedList {
                field: "age".to_string(),
                operator: Operator::In,
            })
        );
    }

    #[test]
    fn unknown_operators_are_rejected() {
        let rule = models::Rule::leaf("age", "around", models::Value::from(3_i64));
        assert_eq!(
            render(&rule),
            Err(Error::UnknownOperator {
                field: "age".to_string(),
                operator: "around".to_string(),
            })
        );
    }

    #[test]
    fn lists_are_not_scalars() {
        let rule = models::Rule::leaf("age", "=", models::Value::from(vec!["a"]));
        assert_eq!(
            render(&rule),
            Err(Error::TypeMismatch {
                field: "age".to_string(),
                operator: Operator::Eq,
                found: "list",
            })
        );
    }
}
