//! Handle the translation of rule values.

use querybuilder_models as models;

use query_engine_sql::sql;

use super::error::Error;
use super::helpers::Comparison;

/// Convert a value into a SQL literal.
pub fn translate_literal(
    comparison: &Comparison,
    value: &models::Value,
) -> Result<sql::ast::Value, Error> {
    match value {
        models::Value::String(s) => Ok(sql::ast::Value::String(s.clone())),
        models::Value::Bool(b) => Ok(sql::ast::Value::Bool(*b)),
        models::Value::Number(n) => Ok(sql::ast::Value::Number(n.clone())),
        models::Value::Null | models::Value::List(_) => Err(comparison.type_mismatch(value)),
    }
}

/// The text of a scalar value, unquoted.
pub fn value_text(comparison: &Comparison, value: &models::Value) -> Result<String, Error> {
    match value {
        models::Value::String(s) => Ok(s.clone()),
        models::Value::Bool(b) => Ok(b.to_string()),
        models::Value::Number(n) => Ok(n.to_string()),
        models::Value::Null | models::Value::List(_) => Err(comparison.type_mismatch(value)),
    }
}

/// Use a value as the name of another column.
pub fn translate_field_reference(
    comparison: &Comparison,
    value: &models::Value,
) -> Result<sql::ast::Expression, Error> {
    Ok(sql::helpers::make_column(value_text(comparison, value)?))
}

/// The right-hand side of a scalar comparison, according to the rule's value source.
pub fn translate_comparison_value(
    comparison: &Comparison,
    value: &models::Value,
) -> Result<sql::ast::Expression, Error> {
    match comparison.value_source {
        models::ValueSource::Value => Ok(sql::ast::Expression::Value(translate_literal(
            comparison, value,
        )?)),
        models::ValueSource::Field => translate_field_reference(comparison, value),
    }
}

/// Split a value into list items. Accepts a comma separated string or a list of scalars;
/// whitespace around each item is dropped.
pub fn comma_list(comparison: &Comparison, value: &models::Value) -> Result<Vec<String>, Error> {
    match value {
        models::Value::String(s) => Ok(s.split(',').map(|item| item.trim().to_string()).collect()),
        models::Value::List(items) => items
            .iter()
            .map(|item| match item {
                models::Value::List(_) => Err(comparison.type_mismatch(item)),
                _ => value_text(comparison, item).map(|text| text.trim().to_string()),
            })
            .collect(),
        models::Value::Null | models::Value::Bool(_) | models::Value::Number(_) => {
            Err(comparison.type_mismatch(value))
        }
    }
}

/// A list item: quoted as a string literal, or a bare column name.
pub fn translate_list_item(comparison: &Comparison, item: String) -> sql::ast::Expression {
    match comparison.value_source {
        models::ValueSource::Value => sql::helpers::make_string(item),
        models::ValueSource::Field => sql::helpers::make_column(item),
    }
}
