//! Compile the filter trees a visual query-builder sends into SQL `WHERE` predicates.
//!
//! ```text
//! let filters = querybuilder_filters::bind_request(body)?;
//! let predicate = filters.to_sql()?;
//! ```

pub mod error;
pub mod filters;

use std::io::Read;

use querybuilder_models as models;

use query_engine_metadata::metadata::AllowedFields;
use query_engine_sql::sql;
use query_engine_translation::translation;

pub use error::Error;
pub use filters::Filters;

/// Decode a filter tree from a request body.
pub fn bind_request<R: Read>(body: R) -> Result<Filters, Error> {
    let filters: models::Filters = serde_json::from_reader(body)?;
    tracing::debug!(rules = filters.rules.len(), "bound filter request");
    Ok(Filters::new(filters))
}

/// Render one rule on its own, without any field restriction. A group renders as a
/// parenthesized predicate, and an empty group as empty text.
pub fn rule_to_sql(rule: &models::Rule) -> Result<String, Error> {
    let allowed_fields = AllowedFields::empty();
    let env = translation::helpers::Env::new(&allowed_fields);
    Ok(translation::filtering::translate_rule(&env, rule)?
        .map(|expression| sql::helpers::expression_to_sql(&expression).sql)
        .unwrap_or_default())
}
