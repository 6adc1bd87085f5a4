//! Helpers for processing requests and building SQL.

use querybuilder_models as models;

use query_engine_metadata::metadata::AllowedFields;

use super::error::Error;
use super::operators::Operator;

/// Static information from the configuration, used across a translation.
#[derive(Debug, Clone, Copy)]
pub struct Env<'a> {
    pub allowed_fields: &'a AllowedFields,
}

impl<'a> Env<'a> {
    pub fn new(allowed_fields: &'a AllowedFields) -> Self {
        Env { allowed_fields }
    }

    /// Should this comparison survive the allow-list?
    ///
    /// Comparisons against another column are always kept, whatever the allow-list says.
    pub fn keeps(&self, comparison: &Comparison) -> bool {
        comparison.value_source == models::ValueSource::Field
            || self.allowed_fields.permits(comparison.field)
    }
}

/// A validated leaf rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub field: &'a str,
    pub operator: Operator,
    pub value_source: models::ValueSource,
}

impl<'a> Comparison<'a> {
    /// Check that a leaf rule has a field and a known operator.
    pub fn from_rule(rule: &'a models::Rule) -> Result<Self, Error> {
        let (field, tag) = match (&rule.field, &rule.operator) {
            (Some(field), Some(tag)) => (field, tag),
            (Some(field), None) => {
                return Err(Error::MissingOperator {
                    field: field.clone(),
                })
            }
            (None, tag) => {
                return Err(Error::MissingField {
                    operator: tag.clone().unwrap_or_default(),
                })
            }
        };
        let operator = Operator::from_tag(tag).ok_or_else(|| Error::UnknownOperator {
            field: field.clone(),
            operator: tag.clone(),
        })?;
        Ok(Comparison {
            field,
            operator,
            value_source: rule.value_source,
        })
    }

    pub fn type_mismatch(&self, value: &models::Value) -> Error {
        Error::TypeMismatch {
            field: self.field.to_string(),
            operator: self.operator,
            found: value.kind(),
        }
    }

    pub fn malformed_range(&self, count: usize) -> Error {
        Error::MalformedRange {
            field: self.field.to_string(),
            operator: self.operator,
            count,
        }
    }

    pub fn malformed_list(&self) -> Error {
        Error::MalformedList {
            field: self.field.to_string(),
            operator: self.operator,
        }
    }
}
