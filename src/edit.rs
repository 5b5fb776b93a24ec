//! Tree editing primitives
//!
//! Child-level edits (`replace_child`, `remove_child`, `add_child`) touch only
//! the direct children of a node and address them by relation label, taking
//! the first match in sequence order. Subtree-level edits (`replace_tree`,
//! `remove_tree`) search the whole tree by structural equality.
//!
//! None of these reorder children: whatever survives an edit keeps its
//! position relative to its siblings.

use crate::error::{Result, RewriteError};
use crate::tree::DependencyTree;

impl DependencyTree {
    /// Replace the first direct child labeled `label` with `new_child`,
    /// attached under `new_label`
    ///
    /// Fails with `StructuralMismatch` if no direct child carries `label`.
    pub fn replace_child(
        &self,
        label: &str,
        new_child: DependencyTree,
        new_label: &str,
    ) -> Result<DependencyTree> {
        let pos = self
            .position_of_label(label)
            .ok_or_else(|| RewriteError::mismatch(label))?;

        let mut children = self.children.clone();
        children[pos] = (new_child, new_label.to_string());
        Ok(DependencyTree::new(self.token.clone(), children))
    }

    /// Remove the first direct child labeled `label`
    ///
    /// Fails with `StructuralMismatch` if no direct child carries `label`.
    pub fn remove_child(&self, label: &str) -> Result<DependencyTree> {
        let pos = self
            .position_of_label(label)
            .ok_or_else(|| RewriteError::mismatch(label))?;
        Ok(self.without_child_at(pos))
    }

    pub(crate) fn without_child_at(&self, pos: usize) -> DependencyTree {
        let children = self
            .children
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(_, edge)| edge.clone())
            .collect();
        DependencyTree::new(self.token.clone(), children)
    }

    /// Append `child` under `label` after all existing children
    pub fn add_child(&self, child: DependencyTree, label: &str) -> DependencyTree {
        self.clone().with_child(child, label)
    }

    /// Replace every subtree equal to `target` with `replacement`
    ///
    /// If the whole tree equals `target` the replacement is returned as is;
    /// otherwise every matching descendant is replaced. A replaced subtree is
    /// not searched again.
    pub fn replace_tree(
        &self,
        target: &DependencyTree,
        replacement: &DependencyTree,
    ) -> DependencyTree {
        if self == target {
            return replacement.clone();
        }
        let children = self
            .children
            .iter()
            .map(|(child, label)| (child.replace_tree(target, replacement), label.clone()))
            .collect();
        DependencyTree::new(self.token.clone(), children)
    }

    /// Drop every descendant subtree equal to `target`
    ///
    /// The root itself is kept even when it equals `target`.
    pub fn remove_tree(&self, target: &DependencyTree) -> DependencyTree {
        let children = self
            .children
            .iter()
            .filter(|(child, _)| child != target)
            .map(|(child, label)| (child.remove_tree(target), label.clone()))
            .collect();
        DependencyTree::new(self.token.clone(), children)
    }
}
