//! Error types for tree rewriting

use thiserror::Error;

/// Error raised by editing primitives, rules and the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// A child with the requested relation label is not attached to the node
    #[error("no child with label `{label}`")]
    StructuralMismatch { label: String },

    /// More than one wh-phrase was found in a single tree
    #[error("found {count} wh-phrases where at most one is supported")]
    AmbiguousInput { count: usize },

    /// Parser output could not be assembled into a single rooted tree
    #[error("malformed sentence: {0}")]
    MalformedSentence(String),

    /// A pipeline stage produced more trees than the configured limit
    #[error("pipeline produced more than {limit} trees")]
    TooManyTrees { limit: usize },
}

impl RewriteError {
    pub(crate) fn mismatch(label: &str) -> Self {
        RewriteError::StructuralMismatch {
            label: label.to_string(),
        }
    }
}

/// Result type for rewrite operations
pub type Result<T> = std::result::Result<T, RewriteError>;
