//! The lexicon: a trie of legal words.
use std::collections::HashMap;
use std::fs::read_to_string;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One node of the trie: a mapping from uppercase letter to child node, plus
/// a flag marking whether the root-to-node path spells a complete word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

impl Node {
    pub fn new() -> Node {
        Node::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The child reached by `letter`, if any.
    pub fn child(&self, letter: char) -> Option<&Node> {
        self.children.get(&letter.to_ascii_uppercase())
    }

    /// All outgoing edges, sorted by letter so that a generator walking them
    /// gets a deterministic move order.
    pub fn edges(&self) -> Vec<(char, &Node)> {
        let mut edges: Vec<_> = self.children.iter().map(|(&c, n)| (c, n)).collect();
        edges.sort_by_key(|&(c, _)| c);
        edges
    }

    /// Add a brand new child for `letter`.
    /// ## Errors
    /// If `letter` already has a child (use [`Node::child`] to walk an
    /// existing edge instead).
    pub fn add_edge(&mut self, letter: char, child: Node) -> Result<(), Error> {
        let letter = letter.to_ascii_uppercase();
        if self.children.contains_key(&letter) {
            return Err(Error::DuplicateEdge(letter));
        }
        self.children.insert(letter, child);
        Ok(())
    }

    fn child_or_insert(&mut self, letter: char) -> &mut Node {
        self.children.entry(letter.to_ascii_uppercase()).or_default()
    }

    fn insert(&mut self, word: &str) {
        let mut node = self;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }
        node.terminal = true;
    }
}

/// A trie holding the set of legal words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexicon {
    root: Node,
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    /// Build a lexicon from a list of words, uppercasing each.
    pub fn build_from_list<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.root.insert(&word.as_ref().to_uppercase());
        }
        lexicon
    }

    /// Read a lexicon from a plain word list, one word per line.
    /// ## Errors
    /// If `path` can not be read.
    pub fn from_file(path: &str) -> Result<Lexicon, Error> {
        let contents = read_to_string(path).map_err(|source| Error::ReadError {
            path: path.to_string(),
            source,
        })?;
        Ok(Lexicon::build_from_list(contents.lines().map(str::trim)))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk `path` from the root.
    /// ## Errors
    /// If any letter of `path` has no corresponding edge.
    pub fn get_node(&self, path: &str) -> Result<&Node, Error> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node
                .child(c)
                .ok_or_else(|| Error::PathNotFound(path.to_string()))?;
        }
        Ok(node)
    }

    /// The terminal node for `word`, if `word` is in the lexicon.
    pub fn lookup(&self, word: &str) -> Option<&Node> {
        match self.get_node(word) {
            Ok(node) if node.is_terminal() => Some(node),
            _ => None,
        }
    }

    /// `true` if `word` is a legal word in this lexicon.
    pub fn is_word(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    #[cfg(feature = "bincode")]
    /// Serialize this lexicon to a binary blob.
    /// ## Errors
    /// If bincode encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        bincode::serialize(self).map_err(|_| Error::LexiconDeserializeError)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize a lexicon previously produced by [`Lexicon::to_bytes`].
    /// ## Errors
    /// If `bytes` is not a valid lexicon blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Lexicon, Error> {
        bincode::deserialize(bytes).map_err(|_| Error::LexiconDeserializeError)
    }
}
