//! Token data attached to dependency tree nodes
//!
//! A token carries exactly the features the rewrite rules consume: surface
//! word, lemma, part-of-speech tag, and position in the sentence.

use std::fmt;

/// Penn Treebank tag for coordinating conjunctions
pub const CC_TAG: &str = "CC";
/// Penn Treebank tag for modals
pub const MODAL_TAG: &str = "MD";
/// Penn Treebank tag for determiners
pub const DET_TAG: &str = "DT";

/// Lemmas treated as determiners
pub const DETERMINERS: &[&str] = &["a", "an", "the"];
/// Lemmas that head an interrogative phrase
pub const WH_LEMMAS: &[&str] = &["which", "what"];

/// Position of a token in its sentence (1-based, as produced by the parser)
pub type TokenIndex = usize;

/// A single word of a parsed sentence
///
/// Tokens are plain values: two tokens are equal only when word, lemma, tag
/// and index all agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token {
    pub word: String,
    pub lemma: String,
    pub pos: String,
    pub index: TokenIndex,
}

impl Token {
    /// Create a new token with the given attributes
    pub fn new(word: &str, lemma: &str, pos: &str, index: TokenIndex) -> Self {
        Self {
            word: word.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            index,
        }
    }

    /// Merge another token's surface text into this one
    ///
    /// Used for particle verbs ("turn" + "off" -> "turn off"). Only the word
    /// changes; lemma, tag and index stay those of `self`.
    pub fn combine(&self, other: &Token) -> Token {
        Token {
            word: format!("{} {}", self.word, other.word),
            ..self.clone()
        }
    }

    pub fn is_determiner(&self) -> bool {
        let lemma = self.lemma.to_lowercase();
        DETERMINERS.contains(&lemma.as_str())
    }

    pub fn is_wh_word(&self) -> bool {
        WH_LEMMAS.contains(&self.lemma.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
