//! Transformer traits
//!
//! Every rewrite rule is a `Transformer` (one tree in, one tree out) or a
//! `FanOutTransformer` (one tree in, a set of trees out). Rules perform a
//! local edit at the node they are given and then call
//! `transform_children` to keep descending.

use crate::error::Result;
use crate::tree::DependencyTree;
use rustc_hash::FxHashSet;

/// Unordered set of trees produced by fan-out rules
pub type TreeSet = FxHashSet<DependencyTree>;

/// A rewrite from one tree to one tree
pub trait Transformer {
    /// Short rule name used in log messages
    fn name(&self) -> &'static str;

    fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree>;

    /// Apply `self` to every child of `tree`, keeping token and labels
    fn transform_children(&self, tree: &DependencyTree) -> Result<DependencyTree> {
        let children = tree
            .children
            .iter()
            .map(|(child, label)| Ok((self.transform(child)?, label.clone())))
            .collect::<Result<Vec<_>>>()?;
        Ok(DependencyTree::new(tree.token.clone(), children))
    }
}

/// A rewrite from one tree to a set of trees
pub trait FanOutTransformer {
    fn name(&self) -> &'static str;

    fn split(&self, tree: &DependencyTree) -> TreeSet;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    /// Uppercases every word in the tree
    struct Shout;

    impl Transformer for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn transform(&self, tree: &DependencyTree) -> Result<DependencyTree> {
            let mut token = tree.token.clone();
            token.word = token.word.to_uppercase();
            let rest = self.transform_children(tree)?;
            Ok(DependencyTree::new(token, rest.children))
        }
    }

    #[test]
    fn test_transform_children_preserves_labels() {
        let tree = DependencyTree::leaf(Token::new("runs", "run", "VBZ", 2))
            .with_child(DependencyTree::leaf(Token::new("dog", "dog", "NN", 1)), "nsubj")
            .with_child(DependencyTree::leaf(Token::new("fast", "fast", "RB", 3)), "advmod");

        let out = Shout.transform_children(&tree).unwrap();

        assert_eq!(out.token.word, "runs");
        assert_eq!(out.labels().collect::<Vec<_>>(), vec!["nsubj", "advmod"]);
        assert_eq!(out.children[0].0.token.word, "DOG");
        assert_eq!(out.children[1].0.token.word, "FAST");

        assert_eq!(Shout.transform(&tree).unwrap().surface(), "DOG RUNS FAST");
    }
}
