//! Wh-phrase location and substitution
//!
//! Turning a question into a statement means finding its interrogative
//! constituent ("which rocks", "what") and swapping in a candidate answer.

use crate::error::{Result, RewriteError};
use crate::transform::Transformer;
use crate::tree::DependencyTree;
use log::trace;

/// Find the wh-phrase of a tree
///
/// Returns the node itself if it is a wh-word, the node if one of its direct
/// leaf children is a wh-word (the phrase that word introduces), and
/// otherwise the single match found among the children. Two or more matches
/// fail with `AmbiguousInput`.
pub fn find_wh_phrase(tree: &DependencyTree) -> Result<Option<&DependencyTree>> {
    if tree.token.is_wh_word() {
        return Ok(Some(tree));
    }
    if tree
        .children
        .iter()
        .any(|(child, _)| child.is_leaf() && child.token.is_wh_word())
    {
        return Ok(Some(tree));
    }

    let mut found = Vec::new();
    for (child, _) in &tree.children {
        if let Some(phrase) = find_wh_phrase(child)? {
            found.push(phrase);
        }
    }
    match found.len() {
        0 => Ok(None),
        1 => Ok(found.pop()),
        count => Err(RewriteError::AmbiguousInput { count }),
    }
}

/// Substitutes the wh-phrase of a question with a fixed replacement tree
///
/// This is a single structural substitution: the rule does not descend into
/// children on its own. Trees without a wh-phrase come back unchanged.
#[derive(Debug, Clone)]
pub struct ReplaceWhPhrase {
    replacement: DependencyTree,
}

impl ReplaceWhPhrase {
    pub fn new(replacement: DependencyTree) -> Self {
        Self { replacement }
    }

    pub fn replacement(&self) -> &DependencyTree {
        &self.replacement
    }
}

impl Transformer for ReplaceWhPhrase {
    fn name(&self) -> &'static str {
        "replace-wh-phrase"
    }

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        match find_wh_phrase(tree)? {
            Some(phrase) => {
                trace!("{}: {} -> {}", self.name(), phrase, self.replacement);
                Ok(tree.replace_tree(phrase, &self.replacement))
            }
            None => Ok(tree.clone()),
        }
    }
}
