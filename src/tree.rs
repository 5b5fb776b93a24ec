//! Recursive dependency tree values
//!
//! A `DependencyTree` owns its token and an ordered list of labeled children.
//! Trees are plain values: equality and hashing are deep and structural, so
//! two separately built subtrees with the same tokens, labels and child order
//! compare equal. Rewrites never mutate a tree in place; every operation in
//! this crate returns a new tree and leaves its input usable.

use crate::token::Token;
use std::fmt;

/// Relation labels the rewrite rules match on
pub mod labels {
    pub const NSUBJ: &str = "nsubj";
    pub const NSUBJPASS: &str = "nsubjpass";
    pub const AGENT: &str = "agent";
    pub const AUXPASS: &str = "auxpass";
    pub const DOBJ: &str = "dobj";
    pub const DET: &str = "det";
    pub const PRT: &str = "prt";
    pub const AMOD: &str = "amod";
    pub const CONJ_AND: &str = "conj_and";
    pub const APPOS: &str = "appos";
    pub const CC: &str = "cc";
    pub const AUX: &str = "aux";
}

/// A child subtree together with the relation label of the edge above it
pub type Edge = (DependencyTree, String);

/// A node in a dependency tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyTree {
    pub token: Token,
    /// Children in parser order; labels may repeat
    pub children: Vec<Edge>,
}

impl DependencyTree {
    /// Create a node with the given children
    pub fn new(token: Token, children: Vec<Edge>) -> Self {
        Self { token, children }
    }

    /// Create a node with no children
    pub fn leaf(token: Token) -> Self {
        Self {
            token,
            children: Vec::new(),
        }
    }

    /// Builder-style child attachment, mostly for assembling fixtures
    pub fn with_child(mut self, child: DependencyTree, label: &str) -> Self {
        self.children.push((child, label.to_string()));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Labels of the direct children, in order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(_, label)| label.as_str())
    }

    pub fn has_child_label(&self, label: &str) -> bool {
        self.labels().any(|l| l == label)
    }

    /// First direct child (in sequence order) attached under `label`
    pub fn child_with_label(&self, label: &str) -> Option<&DependencyTree> {
        self.children
            .iter()
            .find(|(_, l)| l == label)
            .map(|(child, _)| child)
    }

    /// Position of the first direct child attached under `label`
    pub(crate) fn position_of_label(&self, label: &str) -> Option<usize> {
        self.children.iter().position(|(_, l)| l == label)
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(child, _)| child.size())
            .sum::<usize>()
    }

    /// All subtrees in pre-order, starting with `self`
    pub fn subtrees(&self) -> Vec<&DependencyTree> {
        let mut out = Vec::with_capacity(self.size());
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            // Reverse so that the first child is visited first
            for (child, _) in node.children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// True if `target` occurs anywhere in this tree, including the root
    pub fn contains(&self, target: &DependencyTree) -> bool {
        self == target
            || self
                .children
                .iter()
                .any(|(child, _)| child.contains(target))
    }

    /// Tokens in sentence order (sorted by token index)
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens: Vec<&Token> = self.subtrees().into_iter().map(|t| &t.token).collect();
        tokens.sort_by_key(|t| t.index);
        tokens
    }

    /// Surface string of the linearized tree
    pub fn surface(&self) -> String {
        self.tokens()
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lemmas of the linearized tree
    pub fn lemma_yield(&self) -> Vec<&str> {
        self.tokens().iter().map(|t| t.lemma.as_str()).collect()
    }
}

/// Bracketed rendering: a leaf prints as its word, an inner node as
/// `[word] {label: child, ...}`.
impl fmt::Display for DependencyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.token);
        }
        write!(f, "[{}] {{", self.token)?;
        for (i, (child, label)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", label, child)?;
        }
        write!(f, "}}")
    }
}
