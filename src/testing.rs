//! Shared fixtures for property tests

use crate::token::Token;
use crate::tree::DependencyTree;
use proptest::prelude::*;

const WORDS: &[&str] = &["rock", "the", "most", "and", "heat", "which", "will", "off"];
const TAGS: &[&str] = &["NN", "DT", "JJS", "CC", "MD", "RP", "WDT"];
const LABELS: &[&str] = &[
    "nsubj", "dobj", "det", "amod", "cc", "aux", "conj_and", "appos", "prt",
];

fn arb_token() -> impl Strategy<Value = Token> {
    (prop::sample::select(WORDS), prop::sample::select(TAGS))
        .prop_map(|(word, tag)| Token::new(word, word, tag, 0))
}

/// Random trees over a small vocabulary, with unique token indices
pub(crate) fn arb_tree() -> impl Strategy<Value = DependencyTree> {
    let leaf = arb_token().prop_map(DependencyTree::leaf);
    leaf.prop_recursive(3, 16, 3, |inner| {
        (
            arb_token(),
            prop::collection::vec((inner, prop::sample::select(LABELS)), 1..4),
        )
            .prop_map(|(token, children)| {
                let children = children
                    .into_iter()
                    .map(|(child, label)| (child, label.to_string()))
                    .collect();
                DependencyTree::new(token, children)
            })
    })
    .prop_map(|tree| renumber(&tree, &mut 1))
}

/// Assign token indices in pre-order so that no two subtrees are equal
fn renumber(tree: &DependencyTree, next: &mut usize) -> DependencyTree {
    let mut token = tree.token.clone();
    token.index = *next;
    *next += 1;
    let children = tree
        .children
        .iter()
        .map(|(child, label)| (renumber(child, next), label.clone()))
        .collect();
    DependencyTree::new(token, children)
}

/// Number of edges labeled `label` anywhere in the tree
pub(crate) fn count_label(tree: &DependencyTree, label: &str) -> usize {
    tree.subtrees()
        .iter()
        .map(|t| t.labels().filter(|l| *l == label).count())
        .sum()
}
