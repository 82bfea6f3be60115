//! Char-keyed prefix tree holding the dictionary words
//!
//! Nodes live in an arena owned by the dictionary. Each node keeps the index of
//! its parent (a non-owning back link), the fork char labeling its incoming
//! edge, a sorted small array of children and, when it ends a word, the word
//! itself. Removed nodes are recycled through a free list.

use crate::path::{Iter, WordPath};
use crate::word::Word;
use smallvec::SmallVec;
use std::fmt;

/// Default label given to new dictionaries
pub const DEFAULT_LABEL: &str = "DM-SEG";

/// Index of a node in the dictionary arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Children of a node, sorted by fork char.
///
/// Most nodes have one or two children, so four inline slots cover the
/// common case without a heap allocation.
pub(crate) type Branches = SmallVec<[(char, NodeId); 4]>;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) fork: char,
    pub(crate) branches: Branches,
    pub(crate) word: Option<Word>,
}

/// Look up the child reached through `fork`
pub(crate) fn branch_of(branches: &Branches, fork: char) -> Option<NodeId> {
    branches
        .binary_search_by_key(&fork, |&(c, _)| c)
        .ok()
        .map(|at| branches[at].1)
}

/// Result of walking the trie along an input slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Every stored word that prefixes the input, with its length in chars,
    /// shortest first
    pub words: Vec<(usize, &'a Word)>,
    /// The walk consumed the whole input while the trie still had deeper
    /// branches, so a longer word might follow beyond the slice
    pub truncated: bool,
}

/// In-memory trie dictionary.
///
/// Reads (`contains`, `dict_match`, ...) take `&self` and can be shared across
/// threads; mutation takes `&mut self`, so a dictionary shared through an `Arc`
/// can only change once every reader has let go of it.
#[derive(Clone)]
pub struct TrieDictionary {
    label: String,
    roots: Branches,
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    size: usize,
}

impl Default for TrieDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrieDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieDictionary")
            .field("label", &self.label)
            .field("words", &self.size)
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl TrieDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::with_label(DEFAULT_LABEL)
    }

    /// Create an empty dictionary with a label
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            roots: Branches::new(),
            nodes: Vec::new(),
            free: Vec::new(),
            size: 0,
        }
    }

    /// Build a dictionary from untagged word literals
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.add(word.as_ref(), std::iter::empty::<String>());
        }
        dict
    }

    /// Label identifying the dictionary
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Change the dictionary label
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check whether the dictionary holds no words
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of live trie nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Length in chars of the longest stored word
    pub fn max_word_len(&self) -> usize {
        self.words().map(Word::char_len).max().unwrap_or(0)
    }

    /// Add a word, replacing the tags of an existing entry.
    ///
    /// An empty literal is accepted and ignored. A whitespace-only literal is
    /// rejected and leaves the trie untouched.
    pub fn add<I, S>(&mut self, word: &str, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if word.is_empty() {
            return true;
        }
        match Word::with_tags(word, tags) {
            Ok(word) => self.add_word(word),
            Err(err) => {
                log::debug!("rejected dictionary entry {word:?}: {err}");
                false
            }
        }
    }

    /// Add a constructed word, replacing the tags of an existing entry
    pub fn add_word(&mut self, word: Word) -> bool {
        let mut current: Option<NodeId> = None;
        for fork in word.value().chars() {
            let found = branch_of(self.branches(current), fork);
            let next = match found {
                Some(id) => id,
                None => self.attach(current, fork),
            };
            current = Some(next);
        }

        let Some(id) = current else {
            return true;
        };
        let node = &mut self.nodes[id.0];
        if node.word.is_none() {
            self.size += 1;
        }
        node.word = Some(word);
        true
    }

    /// Check whether `word` is stored
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Stored entry for `word`, with its tags
    pub fn get(&self, word: &str) -> Option<&Word> {
        let id = self.locate(word.chars())?;
        self.nodes[id.0].word.as_ref()
    }

    /// Remove a word, pruning the nodes that only served it
    pub fn remove(&mut self, word: &str) -> bool {
        let Some(mut id) = self.locate(word.chars()) else {
            return false;
        };
        if self.nodes[id.0].word.take().is_none() {
            return false;
        }
        self.size -= 1;

        loop {
            let node = &self.nodes[id.0];
            if node.word.is_some() || !node.branches.is_empty() {
                break;
            }
            let (parent, fork) = (node.parent, node.fork);
            let branches = self.branches_mut(parent);
            if let Ok(at) = branches.binary_search_by_key(&fork, |&(c, _)| c) {
                branches.remove(at);
            }
            self.release(id);
            match parent {
                Some(parent) => id = parent,
                None => break,
            }
        }
        true
    }

    /// Children of the node reached by `path`.
    ///
    /// `None` means no node corresponds to the prefix; `Some` with an empty
    /// list means the prefix exists but nothing branches from it. The empty
    /// path addresses the root.
    pub fn with_prefix(&self, path: &[char]) -> Option<Vec<WordPath<'_>>> {
        let branches = if path.is_empty() {
            &self.roots
        } else {
            &self.nodes[self.locate(path.iter().copied())?.0].branches
        };
        Some(
            branches
                .iter()
                .map(|&(_, id)| WordPath::new(self, id))
                .collect(),
        )
    }

    /// Node reached by `path`, if any
    pub fn path(&self, path: &str) -> Option<WordPath<'_>> {
        self.locate(path.chars()).map(|id| WordPath::new(self, id))
    }

    /// All stored words that are prefixes of `input`, shortest first
    pub fn dict_match(&self, input: &[char]) -> Vec<&Word> {
        self.match_prefixes(input)
            .words
            .into_iter()
            .map(|(_, word)| word)
            .collect()
    }

    /// Walk the trie along `input`, collecting every word crossed.
    ///
    /// The walk stops at the first char with no matching edge or when the
    /// input runs out.
    pub fn match_prefixes(&self, input: &[char]) -> PrefixMatch<'_> {
        let mut words = Vec::new();
        let mut branches = &self.roots;
        for (at, &ch) in input.iter().enumerate() {
            let Some(id) = branch_of(branches, ch) else {
                return PrefixMatch {
                    words,
                    truncated: false,
                };
            };
            let node = &self.nodes[id.0];
            if let Some(word) = &node.word {
                words.push((at + 1, word));
            }
            branches = &node.branches;
        }
        PrefixMatch {
            words,
            truncated: !branches.is_empty(),
        }
    }

    /// Depth-first traversal of every node, terminal or not
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Every stored word in depth-first fork order
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.iter().filter_map(|path| path.word())
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn roots(&self) -> &Branches {
        &self.roots
    }

    fn branches(&self, parent: Option<NodeId>) -> &Branches {
        match parent {
            Some(id) => &self.nodes[id.0].branches,
            None => &self.roots,
        }
    }

    fn branches_mut(&mut self, parent: Option<NodeId>) -> &mut Branches {
        match parent {
            Some(id) => &mut self.nodes[id.0].branches,
            None => &mut self.roots,
        }
    }

    fn locate(&self, path: impl Iterator<Item = char>) -> Option<NodeId> {
        let mut current = None;
        for fork in path {
            current = Some(branch_of(self.branches(current), fork)?);
        }
        current
    }

    fn attach(&mut self, parent: Option<NodeId>, fork: char) -> NodeId {
        let node = Node {
            parent,
            fork,
            branches: Branches::new(),
            word: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };
        let branches = self.branches_mut(parent);
        let at = branches.partition_point(|&(c, _)| c < fork);
        branches.insert(at, (fork, id));
        id
    }

    fn release(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        node.parent = None;
        node.branches = Branches::new();
        node.word = None;
        self.free.push(id);
    }
}

impl Extend<Word> for TrieDictionary {
    fn extend<T: IntoIterator<Item = Word>>(&mut self, iter: T) {
        for word in iter {
            self.add_word(word);
        }
    }
}

impl FromIterator<Word> for TrieDictionary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<'a> IntoIterator for &'a TrieDictionary {
    type Item = WordPath<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
