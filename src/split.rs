//! Fan-out splitting of coordinated and appositive phrases
//!
//! "Basalt and granite are igneous" becomes "Basalt are igneous" and
//! "granite are igneous"; "Basalt, a dark rock, is igneous" becomes
//! "Basalt is igneous" and "a dark rock is igneous".
//!
//! The algorithm:
//! 1. Collect every (parent, child) edge carrying the target label.
//! 2. Group the edges by parent and take one group.
//! 3. `base` is the tree with every child of the group removed. Each child
//!    also yields a variant: `base` with the reduced parent replaced by that
//!    child.
//! 4. Split every tree of `{base} + variants` again and union the results.
//!
//! Every round removes at least one target edge from each tree it produces,
//! so recursion stops once no target edges remain. Which group is taken in
//! step 2 does not change the final set.

use crate::transform::{FanOutTransformer, TreeSet};
use crate::tree::{DependencyTree, labels};
use log::debug;
use rustc_hash::FxHashMap;

/// Parent node with the distinct children attached to it under the target label
type Group<'a> = (&'a DependencyTree, Vec<&'a DependencyTree>);

/// Splits a tree on every edge carrying one relation label
#[derive(Debug, Clone, Copy)]
pub struct LabelSplitter {
    label: &'static str,
}

impl LabelSplitter {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn split(&self, tree: &DependencyTree) -> TreeSet {
        self.split_choosing(tree, |_| 0)
    }

    /// Split, using `choose(n)` to pick which of the `n` parent groups to
    /// expand first at every step
    pub(crate) fn split_choosing<F>(&self, tree: &DependencyTree, choose: F) -> TreeSet
    where
        F: Fn(usize) -> usize + Copy,
    {
        let mut groups = self.groups(tree);
        if groups.is_empty() {
            return TreeSet::from_iter([tree.clone()]);
        }

        let pick = choose(groups.len()).min(groups.len() - 1);
        let (parent, members) = groups.swap_remove(pick);
        debug!(
            "split {}: {} of {} groups, expanding {} ({} members)",
            self.label,
            pick,
            groups.len() + 1,
            parent.token,
            members.len()
        );

        let base = members
            .iter()
            .fold(tree.clone(), |acc, member| acc.remove_tree(member));
        let reduced_parent = members
            .iter()
            .fold(parent.clone(), |acc, member| acc.remove_tree(member));

        let mut pending = Vec::with_capacity(members.len() + 1);
        for member in &members {
            pending.push(base.replace_tree(&reduced_parent, member));
        }
        pending.push(base);

        let mut out = TreeSet::default();
        for candidate in pending {
            out.extend(self.split_choosing(&candidate, choose));
        }
        out
    }

    /// Group target-label edges by parent, deduplicating children
    fn groups<'a>(&self, tree: &'a DependencyTree) -> Vec<Group<'a>> {
        let mut edges = Vec::new();
        collect_edges(tree, self.label, &mut edges);

        let mut by_parent: FxHashMap<&DependencyTree, Vec<&DependencyTree>> =
            FxHashMap::default();
        for (parent, child) in edges {
            let members = by_parent.entry(parent).or_default();
            if !members.contains(&child) {
                members.push(child);
            }
        }
        by_parent.into_iter().collect()
    }
}

/// Gather every (parent, child) pair joined by `label`, anywhere in `tree`
fn collect_edges<'a>(
    tree: &'a DependencyTree,
    label: &str,
    out: &mut Vec<(&'a DependencyTree, &'a DependencyTree)>,
) {
    for (child, l) in &tree.children {
        if l == label {
            out.push((tree, child));
        }
        collect_edges(child, label, out);
    }
}

/// Splits "X and Y" coordination (`conj_and`) into one tree per conjunct
#[derive(Debug, Clone, Copy)]
pub struct SplitConjunctions(LabelSplitter);

impl Default for SplitConjunctions {
    fn default() -> Self {
        Self(LabelSplitter::new(labels::CONJ_AND))
    }
}

impl FanOutTransformer for SplitConjunctions {
    fn name(&self) -> &'static str {
        "split-conjunctions"
    }

    fn split(&self, tree: &DependencyTree) -> TreeSet {
        self.0.split(tree)
    }
}

/// Splits appositives (`appos`) into one tree per renaming phrase
#[derive(Debug, Clone, Copy)]
pub struct SplitAppositives(LabelSplitter);

impl Default for SplitAppositives {
    fn default() -> Self {
        Self(LabelSplitter::new(labels::APPOS))
    }
}

impl FanOutTransformer for SplitAppositives {
    fn name(&self) -> &'static str {
        "split-appositives"
    }

    fn split(&self, tree: &DependencyTree) -> TreeSet {
        self.0.split(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_tree, count_label};
    use crate::token::Token;
    use proptest::prelude::*;

    fn leaf(word: &str, index: usize) -> DependencyTree {
        DependencyTree::leaf(Token::new(word, &word.to_lowercase(), "NN", index))
    }

    fn surfaces(trees: &TreeSet) -> Vec<String> {
        let mut out: Vec<String> = trees.iter().map(|t| t.surface()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_no_match_returns_input() {
        let tree = leaf("melts", 2).with_child(leaf("ice", 1), "nsubj");

        let out = SplitConjunctions::default().split(&tree);

        assert_eq!(out, TreeSet::from_iter([tree]));
    }

    #[test]
    fn test_split_root_conjunction() {
        let tree = leaf("rocks", 1).with_child(leaf("minerals", 3), "conj_and");

        let out = SplitConjunctions::default().split(&tree);

        assert_eq!(out, TreeSet::from_iter([leaf("rocks", 1), leaf("minerals", 3)]));
    }

    #[test]
    fn test_split_k_conjuncts_gives_k_plus_one() {
        // "Heat, pressure and time melt rock"
        let subject = leaf("Heat", 1)
            .with_child(leaf("pressure", 3), "conj_and")
            .with_child(leaf("and", 4), "cc")
            .with_child(leaf("time", 5), "conj_and");
        let tree = leaf("melt", 6)
            .with_child(subject, "nsubj")
            .with_child(leaf("rock", 7), "dobj");

        let out = SplitConjunctions::default().split(&tree);

        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|t| count_label(t, "conj_and") == 0));
        assert_eq!(
            surfaces(&out),
            vec!["Heat and melt rock", "pressure melt rock", "time melt rock"]
        );
    }

    #[test]
    fn test_split_independent_sites() {
        let tree = leaf("melt", 4)
            .with_child(leaf("heat", 1).with_child(leaf("pressure", 3), "conj_and"), "nsubj")
            .with_child(leaf("rock", 5).with_child(leaf("ice", 7), "conj_and"), "dobj");

        let out = SplitConjunctions::default().split(&tree);

        assert_eq!(
            surfaces(&out),
            vec![
                "heat melt ice",
                "heat melt rock",
                "pressure melt ice",
                "pressure melt rock"
            ]
        );
    }

    #[test]
    fn test_split_nested_conjunction() {
        let b = leaf("b", 2).with_child(leaf("c", 3), "conj_and");
        let tree = leaf("a", 1).with_child(b, "conj_and");

        let first = SplitConjunctions::default().0.split_choosing(&tree, |_| 0);
        let last = SplitConjunctions::default().0.split_choosing(&tree, |n| n - 1);

        let expected = TreeSet::from_iter([leaf("a", 1), leaf("b", 2), leaf("c", 3)]);
        assert_eq!(first, expected);
        assert_eq!(last, expected);
    }

    #[test]
    fn test_split_appositive() {
        // "Basalt, an igneous rock, is dark"
        let rock = leaf("rock", 5)
            .with_child(leaf("an", 3), "det")
            .with_child(leaf("igneous", 4), "amod");
        let tree = leaf("dark", 8)
            .with_child(leaf("Basalt", 1).with_child(rock, "appos"), "nsubj")
            .with_child(leaf("is", 7), "cop");

        let out = SplitAppositives::default().split(&tree);

        assert_eq!(
            surfaces(&out),
            vec!["Basalt is dark", "an igneous rock is dark"]
        );
        // Conjunction splitting ignores appositives
        assert_eq!(SplitConjunctions::default().split(&tree).len(), 1);
    }

    #[test]
    fn test_duplicate_children_collapse() {
        let twin = leaf("ice", 3);
        let tree = leaf("rock", 1)
            .with_child(twin.clone(), "conj_and")
            .with_child(twin.clone(), "conj_and");

        let out = SplitConjunctions::default().split(&tree);

        assert_eq!(out, TreeSet::from_iter([leaf("rock", 1), twin]));
    }

    proptest! {
        #[test]
        fn prop_split_removes_every_edge(tree in arb_tree()) {
            for out in SplitConjunctions::default().split(&tree) {
                prop_assert_eq!(count_label(&out, "conj_and"), 0);
            }
        }

        #[test]
        fn prop_split_independent_of_group_order(tree in arb_tree()) {
            let splitter = LabelSplitter::new("conj_and");
            let first = splitter.split_choosing(&tree, |_| 0);
            let last = splitter.split_choosing(&tree, |n| n - 1);
            let middle = splitter.split_choosing(&tree, |n| n / 2);
            prop_assert_eq!(&first, &last);
            prop_assert_eq!(&first, &middle);
        }
    }
}
