//! Wire types of the filter tree produced by a visual query-builder.
//!
//! These mirror the JSON shape the client sends: a root object with `rules`, `combinator` and
//! `not`, and rules which are either a single comparison or a nested group of rules.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ANCHOR: Filters
/// The root of a filter tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Filters {
    /// The top-level rules, in order
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// The joiner placed between the top-level rules
    #[serde(default)]
    pub combinator: Combinator,
    /// Negate the whole predicate
    #[serde(default)]
    pub not: bool,
}
// ANCHOR_END: Filters

impl Filters {
    pub fn new(combinator: Combinator, rules: Vec<Rule>) -> Self {
        Filters {
            rules,
            combinator,
            not: false,
        }
    }

    #[must_use]
    pub fn negated(mut self) -> Self {
        self.not = true;
        self
    }
}

// ANCHOR: Rule
/// A node of the filter tree.
///
/// A rule is either a leaf, which compares `field` with `value` using `operator`, or a group,
/// which has `rules` and joins them with `combinator`. The wire format does not separate the
/// two, so both sets of keys live on the same object; mixing them is rejected at translation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// The column being compared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The comparand
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
    /// The operator tag, e.g. `=`, `beginsWith` or `notIn`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Whether `value` is a literal or the name of another column
    #[serde(default, skip_serializing_if = "ValueSource::is_default")]
    pub value_source: ValueSource,
    /// Nested rules. Present only on groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    /// The joiner placed between nested rules
    #[serde(default)]
    pub combinator: Combinator,
    /// Negate this group
    #[serde(default)]
    pub not: bool,
}
// ANCHOR_END: Rule

impl Rule {
    /// A comparison of a column against a literal value.
    pub fn leaf(field: impl Into<String>, operator: impl Into<String>, value: Value) -> Self {
        Rule {
            field: Some(field.into()),
            value,
            operator: Some(operator.into()),
            ..Rule::default()
        }
    }

    /// A comparison of a column against another column.
    pub fn field_comparison(
        field: impl Into<String>,
        operator: impl Into<String>,
        other_field: impl Into<String>,
    ) -> Self {
        Rule {
            value_source: ValueSource::Field,
            ..Rule::leaf(field, operator, Value::String(other_field.into()))
        }
    }

    /// A nested group of rules.
    pub fn group(combinator: Combinator, rules: Vec<Rule>) -> Self {
        Rule {
            rules: Some(rules),
            combinator,
            ..Rule::default()
        }
    }

    #[must_use]
    pub fn negated(mut self) -> Self {
        self.not = true;
        self
    }

    /// Does this rule carry nested rules?
    pub fn is_group(&self) -> bool {
        self.rules.is_some()
    }
}

// ANCHOR: Combinator
/// The boolean joiner between sibling rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    #[default]
    #[serde(alias = "AND")]
    And,
    #[serde(alias = "OR")]
    Or,
}
// ANCHOR_END: Combinator

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Combinator::And => write!(f, "and"),
            Combinator::Or => write!(f, "or"),
        }
    }
}

// ANCHOR: ValueSource
/// Where the right-hand side of a comparison comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// `value` is a constant. Clients send an empty string for this too.
    #[default]
    #[serde(alias = "")]
    Value,
    /// `value` names another column
    Field,
}
// ANCHOR_END: ValueSource

impl ValueSource {
    fn is_default(&self) -> bool {
        *self == ValueSource::default()
    }
}

// ANCHOR: Value
/// The comparand of a rule.
///
/// Numbers keep the exact text they were sent with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<Value>),
}
// ANCHOR_END: Value

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// A short name for the kind of value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }
}

// Decoded through `serde_json::Value`, since numbers of arbitrary precision do not survive the
// buffering an untagged derive does.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(json).map_err(|unexpected| {
            serde::de::Error::invalid_type(
                serde::de::Unexpected::Other(unexpected),
                &"a scalar or a list of values",
            )
        })
    }
}

impl Value {
    fn from_json(json: serde_json::Value) -> Result<Value, &'static str> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => Ok(Value::Number(n)),
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(_) => Err("object"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn decodes_a_nested_tree() {
        let filters: Filters = serde_json::from_str(
            r#"{
                "rules": [
                    { "field": "age", "value": 28, "operator": ">" },
                    {
                        "rules": [
                            { "field": "a", "value": "b", "operator": "=", "valueSource": "field" }
                        ],
                        "combinator": "or",
                        "not": true
                    }
                ],
                "combinator": "and",
                "not": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            filters,
            Filters::new(
                Combinator::And,
                vec![
                    Rule::leaf("age", ">", Value::from(28_i64)),
                    Rule::group(Combinator::Or, vec![Rule::field_comparison("a", "=", "b")])
                        .negated(),
                ]
            )
        );
    }

    #[test]
    fn missing_keys_take_defaults() {
        let rule: Rule = serde_json::from_str(r#"{ "field": "job", "operator": "null" }"#).unwrap();

        assert_eq!(rule.value, Value::Null);
        assert_eq!(rule.value_source, ValueSource::Value);
        assert_eq!(rule.combinator, Combinator::And);
        assert!(!rule.is_group());
    }

    #[test]
    fn an_empty_rules_key_still_makes_a_group() {
        let rule: Rule = serde_json::from_str(r#"{ "rules": [], "combinator": "or" }"#).unwrap();

        assert!(rule.is_group());
        assert_eq!(rule.combinator, Combinator::Or);
    }

    #[test]
    fn decodes_mixed_lists() {
        let value: Value = serde_json::from_str(r#"["Vai", 3, true, null]"#).unwrap();

        assert_eq!(
            value,
            Value::List(vec![
                Value::from("Vai"),
                Value::from(3_i64),
                Value::Bool(true),
                Value::Null
            ])
        );
    }

    #[test]
    fn rejects_unknown_value_sources() {
        let result: Result<Rule, _> =
            serde_json::from_str(r#"{ "field": "a", "operator": "=", "valueSource": "column" }"#);

        assert!(result.is_err());
    }

    #[test]
    fn an_empty_value_source_means_a_literal() {
        let rule: Rule =
            serde_json::from_str(r#"{ "field": "a", "operator": "=", "value": "x", "valueSource": "" }"#)
                .unwrap();

        assert_eq!(rule.value_source, ValueSource::Value);
    }

    #[test]
    fn keeps_large_numbers_exact() {
        let value: Value = serde_json::from_str("12345678901234567890123").unwrap();

        match &value {
            Value::Number(n) => assert_eq!(n.to_string(), "12345678901234567890123"),
            other => panic!("expected a number, got {other:?}"),
        }
        assert_eq!(serde_json::to_string(&value).unwrap(), "12345678901234567890123");
    }

    #[test]
    fn rejects_object_values() {
        let result: Result<Rule, _> =
            serde_json::from_str(r#"{ "field": "a", "operator": "=", "value": { "x": 1 } }"#);

        assert!(result.is_err());
    }

    #[test]
    fn serializes_without_empty_keys() {
        let json = serde_json::to_value(Rule::leaf("job", "=", Value::from("handyman"))).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "field": "job",
                "value": "handyman",
                "operator": "=",
                "combinator": "and",
                "not": false
            })
        );
    }
}
