//! Errors surfaced to callers of the filter compiler.

use query_engine_translation::translation;

/// A failure to bind or compile a filter tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request body is not a filter tree.
    #[error("binding filters [ERR: {0}]")]
    Decode(#[from] serde_json::Error),
    /// The filter tree could not be turned into a predicate.
    #[error(transparent)]
    Translation(#[from] translation::error::Error),
}
