//! Single-output rewrite rules
//!
//! Each rule looks for one local pattern among the direct children of the
//! node it is given, rewrites that node if the pattern is present, and keeps
//! descending into the children either way.

use crate::error::Result;
use crate::token::{CC_TAG, MODAL_TAG};
use crate::transform::Transformer;
use crate::tree::{DependencyTree, labels};
use log::trace;

/// Position of the first direct leaf child under `label` accepted by `pred`
fn find_leaf_child(
    tree: &DependencyTree,
    label: &str,
    pred: impl Fn(&DependencyTree) -> bool,
) -> Option<usize> {
    tree.children
        .iter()
        .position(|(child, l)| l == label && child.is_leaf() && pred(child))
}

/// Remove every direct leaf child under `label` accepted by `pred`
///
/// Removal rules rewrite the children first and prune afterwards, so a child
/// that only becomes a leaf during the rewrite is pruned in the same pass.
fn drop_leaf_children(
    mut tree: DependencyTree,
    label: &str,
    pred: impl Fn(&DependencyTree) -> bool,
) -> DependencyTree {
    let before = tree.children.len();
    tree.children
        .retain(|(child, l)| !(l == label && child.is_leaf() && pred(child)));
    if tree.children.len() < before {
        trace!(
            "dropped {} `{}` leaves under {}",
            before - tree.children.len(),
            label,
            tree.token
        );
    }
    tree
}

/// Turns "X was done by Y" into "Y did X"
///
/// A node with `nsubjpass`, `agent` and `auxpass` children gets the agent
/// as `nsubj` in the subject's slot, the passive subject as `dobj` in the
/// agent's slot, and loses the passive auxiliary.
#[derive(Debug, Default, Clone, Copy)]
pub struct UndoPassivization;

impl Transformer for UndoPassivization {
    fn name(&self) -> &'static str {
        "undo-passivization"
    }

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        if tree.children.len() < 3 || !tree.has_child_label(labels::AUXPASS) {
            return self.transform_children(tree);
        }
        let (Some(patient), Some(agent)) = (
            tree.child_with_label(labels::NSUBJPASS),
            tree.child_with_label(labels::AGENT),
        ) else {
            return self.transform_children(tree);
        };

        trace!("{}: activating {}", self.name(), tree.token);
        let active = tree
            .replace_child(labels::NSUBJPASS, agent.clone(), labels::NSUBJ)?
            .replace_child(labels::AGENT, patient.clone(), labels::DOBJ)?
            .remove_child(labels::AUXPASS)?;
        self.transform_children(&active)
    }
}

/// Drops leaf determiners ("the", "a", "an") attached under `det`
///
/// A `det` child with dependents of its own is left alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveDeterminers;

impl Transformer for RemoveDeterminers {
    fn name(&self) -> &'static str {
        "remove-determiners"
    }

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        let rewritten = self.transform_children(tree)?;
        Ok(drop_leaf_children(rewritten, labels::DET, |c| c.token.is_determiner()))
    }
}

/// Folds a `prt` particle into its verb ("turn" + "off" -> "turn off")
#[derive(Debug, Default, Clone, Copy)]
pub struct CombineParticles;

impl Transformer for CombineParticles {
    fn name(&self) -> &'static str {
        "combine-particles"
    }

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        let Some(pos) = tree.position_of_label(labels::PRT) else {
            return self.transform_children(tree);
        };
        let particle = &tree.children[pos].0;
        trace!("{}: {} + {}", self.name(), tree.token, particle.token);

        let combined = DependencyTree::new(
            tree.token.combine(&particle.token),
            tree.without_child_at(pos).children,
        );
        self.transform_children(&combined)
    }
}

/// Drops leaf `amod` modifiers whose lemma is "most"
///
/// Matches are removed as subtrees, so equal copies elsewhere below the node
/// go too.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveSuperlatives;

impl Transformer for RemoveSuperlatives {
    fn name(&self) -> &'static str {
        "remove-superlatives"
    }

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        let mut rewritten = self.transform_children(tree)?;
        while let Some(pos) =
            find_leaf_child(&rewritten, labels::AMOD, |c| c.token.lemma == "most")
        {
            let most = rewritten.children[pos].0.clone();
            trace!("{}: dropping {} under {}", self.name(), most.token, rewritten.token);
            rewritten = rewritten.remove_tree(&most);
        }
        Ok(rewritten)
    }
}

/// Drops leaf coordinating conjunctions (tag `CC`) attached under `cc`
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveBareCCs;

impl Transformer for RemoveBareCCs {
    fn name(&self) -> &'static str {
        "remove-bare-ccs"
    }

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        let rewritten = self.transform_children(tree)?;
        Ok(drop_leaf_children(rewritten, labels::CC, |c| c.token.pos == CC_TAG))
    }
}

/// Drops leaf modal auxiliaries (tag `MD`) attached under `aux`
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveAuxiliaries;

impl Transformer for RemoveAuxiliaries {
    fn name(&self) -> &'static str {
        "remove-auxiliaries"
    }

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        let rewritten = self.transform_children(tree)?;
        Ok(drop_leaf_children(rewritten, labels::AUX, |c| c.token.pos == MODAL_TAG))
    }
}
