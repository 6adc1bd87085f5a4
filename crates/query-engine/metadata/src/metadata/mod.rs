//! Metadata information regarding which fields a filter tree may reference.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub allowed_fields: AllowedFields,
}

/// The set of field names a filter tree may compare against.
/// An empty set places no restriction on fields.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct AllowedFields(pub BTreeSet<String>);

impl AllowedFields {
    pub fn empty() -> Self {
        AllowedFields(BTreeSet::new())
    }

    /// No field restriction is in place.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// May a comparison on this field appear in the output?
    pub fn permits(&self, field: &str) -> bool {
        self.is_unrestricted() || self.0.contains(field)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedFields {
    fn from_iter<I: IntoIterator<Item = S>>(fields: I) -> Self {
        AllowedFields(fields.into_iter().map(Into::into).collect())
    }
}
