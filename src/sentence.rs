//! Flat parser output and conversion to recursive trees
//!
//! Parsers hand back a sentence as a list of words, each pointing at its
//! head by index (CoNLL-U style: 1-based indices, head 0 for the root).
//! `Sentence::to_tree` assembles that list into a `DependencyTree`, and
//! `Sentence::from_tree` flattens a (possibly rewritten) tree back.

use crate::error::{Result, RewriteError};
use crate::token::{Token, TokenIndex};
use crate::tree::DependencyTree;
use rustc_hash::{FxHashMap, FxHashSet};

/// Relation label given to the root word when flattening a tree
pub const ROOT_LABEL: &str = "root";

/// A word as produced by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub index: TokenIndex,
    pub form: String,
    pub lemma: String,
    pub pos: String,
    /// Index of the head word, `None` for the root
    pub head: Option<TokenIndex>,
    pub deprel: String,
}

impl Word {
    /// Create an unattached word
    pub fn new(index: TokenIndex, form: &str, lemma: &str, pos: &str, deprel: &str) -> Self {
        Self {
            index,
            form: form.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            head: None,
            deprel: deprel.to_string(),
        }
    }

    pub fn token(&self) -> Token {
        Token::new(&self.form, &self.lemma, &self.pos, self.index)
    }
}

/// A parsed sentence in head-pointer form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word and return its index
    pub fn add_word(&mut self, word: Word) -> TokenIndex {
        let index = word.index;
        self.words.push(word);
        index
    }

    pub fn get_word(&self, index: TokenIndex) -> Option<&Word> {
        self.words.iter().find(|w| w.index == index)
    }

    /// Attach `child` to `head`
    pub fn set_head(&mut self, child: TokenIndex, head: TokenIndex) {
        if let Some(word) = self.words.iter_mut().find(|w| w.index == child) {
            word.head = Some(head);
        }
    }

    /// Dependents of a word, in sentence order
    pub fn children(&self, index: TokenIndex) -> Vec<&Word> {
        let mut children: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| w.head == Some(index))
            .collect();
        children.sort_by_key(|w| w.index);
        children
    }

    /// Assemble the head pointers into a single rooted tree
    ///
    /// Each node's children are ordered by sentence index. Fails with
    /// `MalformedSentence` on an empty sentence, duplicate indices, a missing
    /// or repeated root, a head that names no word, or a cycle.
    pub fn to_tree(&self) -> Result<DependencyTree> {
        let malformed = |msg: String| RewriteError::MalformedSentence(msg);

        let mut seen = FxHashSet::default();
        for word in &self.words {
            if !seen.insert(word.index) {
                return Err(malformed(format!("duplicate word index {}", word.index)));
            }
        }

        let mut roots = self.words.iter().filter(|w| w.head.is_none());
        let root = roots
            .next()
            .ok_or_else(|| malformed("no root word".to_string()))?;
        if let Some(other) = roots.next() {
            return Err(malformed(format!(
                "words {} and {} are both roots",
                root.index, other.index
            )));
        }

        let mut dependents: FxHashMap<TokenIndex, Vec<&Word>> = FxHashMap::default();
        for word in &self.words {
            if let Some(head) = word.head {
                if !seen.contains(&head) {
                    return Err(malformed(format!(
                        "word {} points at missing head {}",
                        word.index, head
                    )));
                }
                dependents.entry(head).or_default().push(word);
            }
        }
        for children in dependents.values_mut() {
            children.sort_by_key(|w| w.index);
        }

        let tree = build(root, &dependents);
        // Words on a cycle are never reached from the root
        if tree.size() != self.words.len() {
            return Err(malformed(format!(
                "{} words are not connected to the root",
                self.words.len() - tree.size()
            )));
        }
        Ok(tree)
    }

    /// Flatten a tree back into head-pointer form, ordered by index
    pub fn from_tree(tree: &DependencyTree) -> Self {
        let mut words = Vec::with_capacity(tree.size());
        flatten(tree, None, ROOT_LABEL, &mut words);
        words.sort_by_key(|w| w.index);
        Self { words }
    }

    /// Surface text in sentence order
    pub fn text(&self) -> String {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_by_key(|w| w.index);
        words
            .iter()
            .map(|w| w.form.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn build(word: &Word, dependents: &FxHashMap<TokenIndex, Vec<&Word>>) -> DependencyTree {
    let children = dependents
        .get(&word.index)
        .map(|children| {
            children
                .iter()
                .map(|child| (build(child, dependents), child.deprel.clone()))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    DependencyTree::new(word.token(), children)
}

fn flatten(tree: &DependencyTree, head: Option<TokenIndex>, deprel: &str, out: &mut Vec<Word>) {
    let token = &tree.token;
    let mut word = Word::new(token.index, &token.word, &token.lemma, &token.pos, deprel);
    word.head = head;
    out.push(word);
    for (child, label) in &tree.children {
        flatten(child, Some(token.index), label, out);
    }
}
