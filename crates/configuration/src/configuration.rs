//! Runtime configuration for filter compilation.

use query_engine_metadata::metadata;

/// The 'Configuration' type collects all the information necessary to compile filters at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration'. Keeping the on-disk format separate lets it evolve without
/// touching the translation logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
}
