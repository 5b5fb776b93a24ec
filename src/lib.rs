//! Treerewrite: structural normalization of dependency parse trees
//!
//! Rewrites parsed sentences into canonical shapes (active voice, no
//! determiners or modals, one conjunct per tree, questions turned into
//! statements) so that downstream scoring can compare sentence structures.
//! All rewrites are purely syntactic and return new trees.

// Core modules
pub mod edit; // Child- and subtree-level editing primitives
pub mod error; // Error types
pub mod pipeline; // Ordered application of rules
pub mod rules; // Single-output rewrite rules
pub mod sentence; // Head-pointer parser output <-> trees
pub mod split; // Fan-out splitting of conjunctions and appositives
pub mod token; // Token data
pub mod transform; // Transformer traits
pub mod tree; // Recursive tree values
pub mod wh; // Wh-phrase location and substitution

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use error::{Result, RewriteError};
pub use pipeline::{Pipeline, PipelineConfig, Stage};
pub use rules::{
    CombineParticles, RemoveAuxiliaries, RemoveBareCCs, RemoveDeterminers, RemoveSuperlatives,
    UndoPassivization,
};
pub use sentence::{Sentence, Word};
pub use split::{LabelSplitter, SplitAppositives, SplitConjunctions};
pub use token::Token;
pub use transform::{FanOutTransformer, Transformer, TreeSet};
pub use tree::DependencyTree;
pub use wh::{ReplaceWhPhrase, find_wh_phrase};
