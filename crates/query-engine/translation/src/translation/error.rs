//! Errors for filter translation.

use thiserror::Error;

use super::operators::Operator;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown operator '{operator}' on field '{field}'.")]
    UnknownOperator { field: String, operator: String },
    #[error("Rule on field '{field}' has no operator.")]
    MissingOperator { field: String },
    #[error("Rule with operator '{operator}' has no field.")]
    MissingField { operator: String },
    #[error("Rule on field '{field}' has both a comparison and nested rules.")]
    MixedRule { field: String },
    #[error("Operator '{operator}' on field '{field}' needs exactly two values, got {count}.")]
    MalformedRange {
        field: String,
        operator: Operator,
        count: usize,
    },
    #[error("Operator '{operator}' on field '{field}' needs at least one value.")]
    MalformedList { field: String, operator: Operator },
    #[error("Operator '{operator}' on field '{field}' does not accept a {found} value.")]
    TypeMismatch {
        field: String,
        operator: Operator,
        found: &'static str,
    },
}

impl Error {
    /// The field of the rule that failed to translate, if it had one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::UnknownOperator { field, .. }
            | Error::MissingOperator { field }
            | Error::MixedRule { field }
            | Error::MalformedRange { field, .. }
            | Error::MalformedList { field, .. }
            | Error::TypeMismatch { field, .. } => Some(field),
            Error::MissingField { .. } => None,
        }
    }
}
