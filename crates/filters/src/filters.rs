//! The root of a filter tree and its compiled predicate.

use std::sync::OnceLock;

use querybuilder_configuration::Configuration;
use querybuilder_models as models;

use query_engine_metadata::metadata::AllowedFields;
use query_engine_sql::sql;
use query_engine_translation::translation;

use crate::error::Error;

/// A decoded filter tree, the allow-list it is compiled against, and the compiled predicate once
/// it has been asked for.
///
/// The predicate is computed at most once. Changing the allow-list takes `&mut self` and
/// discards the cached predicate, so a stale predicate can never be observed.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    filters: models::Filters,
    allowed_fields: AllowedFields,
    predicate: OnceLock<String>,
}

impl Filters {
    pub fn new(filters: models::Filters) -> Self {
        Filters {
            filters,
            allowed_fields: AllowedFields::empty(),
            predicate: OnceLock::new(),
        }
    }

    /// Compile against the allow-list of a runtime configuration.
    pub fn with_configuration(filters: models::Filters, configuration: &Configuration) -> Self {
        Filters {
            allowed_fields: configuration.metadata.allowed_fields.clone(),
            ..Filters::new(filters)
        }
    }

    /// Decode a filter tree from JSON text.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(Filters::new(serde_json::from_str(json)?))
    }

    /// Is there anything to compile? Use this instead of checking for an empty predicate, which
    /// costs a full compilation.
    ///
    /// A usable tree can still compile to nothing once the allow-list has dropped its rules.
    pub fn usable(&self) -> bool {
        !self.filters.rules.is_empty()
    }

    /// Same as [`Filters::usable`].
    pub fn exists(&self) -> bool {
        self.usable()
    }

    /// Restrict the fields that may appear in the predicate. An empty list lifts the restriction.
    /// Rules comparing one field against another are kept regardless.
    pub fn allow_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_fields = fields.into_iter().collect();
        self.predicate = OnceLock::new();
    }

    pub fn allowed_fields(&self) -> &AllowedFields {
        &self.allowed_fields
    }

    pub fn models(&self) -> &models::Filters {
        &self.filters
    }

    pub fn into_models(self) -> models::Filters {
        self.filters
    }

    /// The predicate AST, or `None` when nothing is left to filter on.
    pub fn to_expression(&self) -> Result<Option<sql::ast::Expression>, Error> {
        if !self.usable() {
            return Ok(None);
        }
        let env = translation::helpers::Env::new(&self.allowed_fields);
        Ok(translation::filtering::translate(&env, &self.filters)?)
    }

    /// The predicate text, empty when nothing is left to filter on. Computed on first call.
    pub fn to_sql(&self) -> Result<&str, Error> {
        if let Some(predicate) = self.predicate.get() {
            return Ok(predicate.as_str());
        }
        let predicate = self
            .to_expression()?
            .map(|expression| sql::helpers::expression_to_sql(&expression).sql)
            .unwrap_or_default();

        tracing::info!("Generated predicate: {}", predicate);
        Ok(self.predicate.get_or_init(|| predicate).as_str())
    }

    /// A `WHERE` clause for the predicate, or empty text when there is nothing to filter on.
    pub fn where_clause(&self) -> Result<String, Error> {
        let predicate = self.to_sql()?;
        if predicate.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("WHERE {predicate}"))
        }
    }
}

impl From<models::Filters> for Filters {
    fn from(filters: models::Filters) -> Self {
        Filters::new(filters)
    }
}
