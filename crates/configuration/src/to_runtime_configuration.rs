//! Convert the parsed configuration metadata to internal engine metadata
//! That can be used by the filter compiler.

use std::collections::BTreeSet;

use query_engine_metadata::metadata;

use crate::configuration::Configuration;
use crate::error::ParseConfigurationError;
use crate::version1::ParsedConfiguration;

/// Convert the parsed configuration to a runtime configuration.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
) -> Result<Configuration, ParseConfigurationError> {
    parsed_config.validate()?;

    let field_count = parsed_config.allowed_fields.len();
    let allowed_fields: BTreeSet<String> = parsed_config.allowed_fields.into_iter().collect();
    if allowed_fields.len() < field_count {
        tracing::warn!(
            duplicates = field_count - allowed_fields.len(),
            "the allow-list names some fields more than once"
        );
    }

    Ok(Configuration {
        metadata: metadata::Metadata {
            allowed_fields: metadata::AllowedFields(allowed_fields),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let configuration = make_runtime_configuration(ParsedConfiguration {
            allowed_fields: vec!["age".to_string(), "job".to_string(), "age".to_string()],
            ..ParsedConfiguration::empty()
        })
        .unwrap();

        let expected: metadata::AllowedFields = ["age", "job"].into_iter().collect();
        assert_eq!(configuration.metadata.allowed_fields, expected);
    }

    #[test]
    fn empty_configuration_is_unrestricted() {
        let configuration = make_runtime_configuration(ParsedConfiguration::empty()).unwrap();

        assert!(configuration.metadata.allowed_fields.is_unrestricted());
    }
}
