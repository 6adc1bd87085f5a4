//! Handle filter tree translation.
//!
//! Pruning and rendering happen in one walk: a leaf the allow-list rejects is dropped on the
//! spot, a group with nothing left in it disappears, and combinators only ever sit between
//! the survivors.

use querybuilder_models as models;

use query_engine_sql::sql;

use super::error::Error;
use super::helpers::{Comparison, Env};
use super::operators;

/// Translate a whole filter tree. `None` means nothing survived, or there was nothing to begin
/// with, and the predicate is empty.
pub fn translate(
    env: &Env,
    filters: &models::Filters,
) -> Result<Option<sql::ast::Expression>, Error> {
    let predicate = translate_rules(env, &filters.rules, filters.combinator)?
        .map(|group| negate_if(filters.not, group));

    tracing::debug!("Filter AST: {:?}", predicate);
    Ok(predicate)
}

/// Translate a single rule, leaf or group.
pub fn translate_rule(
    env: &Env,
    rule: &models::Rule,
) -> Result<Option<sql::ast::Expression>, Error> {
    match &rule.rules {
        Some(rules) => {
            if rule.field.is_some() || rule.operator.is_some() || !rule.value.is_null() {
                return Err(Error::MixedRule {
                    field: rule.field.clone().unwrap_or_default(),
                });
            }
            Ok(translate_rules(env, rules, rule.combinator)?
                .map(|group| negate_if(rule.not, group)))
        }
        None => {
            let comparison = Comparison::from_rule(rule)?;
            if env.keeps(&comparison) {
                operators::translate_comparison(&comparison, &rule.value).map(Some)
            } else {
                tracing::debug!(
                    field = comparison.field,
                    "dropping rule on a field outside the allow-list"
                );
                Ok(None)
            }
        }
    }
}

fn translate_rules(
    env: &Env,
    rules: &[models::Rule],
    combinator: models::Combinator,
) -> Result<Option<sql::ast::Expression>, Error> {
    let mut expressions = Vec::with_capacity(rules.len());
    for rule in rules {
        if let Some(expression) = translate_rule(env, rule)? {
            expressions.push(expression);
        }
    }
    Ok(sql::helpers::make_group(
        translate_combinator(combinator),
        expressions,
    ))
}

fn translate_combinator(combinator: models::Combinator) -> sql::ast::Combinator {
    match combinator {
        models::Combinator::And => sql::ast::Combinator::And,
        models::Combinator::Or => sql::ast::Combinator::Or,
    }
}

fn negate_if(not: bool, expression: sql::ast::Expression) -> sql::ast::Expression {
    if not {
        sql::helpers::make_not(expression)
    } else {
        expression
    }
}
