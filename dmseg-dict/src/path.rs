//! Read-only views over trie nodes

use crate::trie::{NodeId, TrieDictionary};
use crate::word::Word;
use std::fmt;
use std::slice;

/// A word path: one node of the trie together with the dictionary owning it.
///
/// The path spells the chars from the root down to this node. Two paths are
/// equal when they spell the same string.
#[derive(Clone, Copy)]
pub struct WordPath<'a> {
    dict: &'a TrieDictionary,
    id: NodeId,
}

impl<'a> WordPath<'a> {
    pub(crate) fn new(dict: &'a TrieDictionary, id: NodeId) -> Self {
        Self { dict, id }
    }

    /// Arena index of the node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Char labeling the edge into this node
    pub fn fork(&self) -> char {
        self.dict.node(self.id).fork
    }

    /// Whether a stored word ends here
    pub fn is_terminal(&self) -> bool {
        self.dict.node(self.id).word.is_some()
    }

    /// The word ending at this node, if any
    pub fn word(&self) -> Option<&'a Word> {
        self.dict.node(self.id).word.as_ref()
    }

    /// Parent path; `None` for nodes directly under the root
    pub fn parent(&self) -> Option<WordPath<'a>> {
        self.dict
            .node(self.id)
            .parent
            .map(|id| WordPath::new(self.dict, id))
    }

    /// Immediate children in fork order
    pub fn children(&self) -> impl Iterator<Item = WordPath<'a>> + 'a {
        let dict = self.dict;
        dict.node(self.id)
            .branches
            .iter()
            .map(move |&(_, id)| WordPath::new(dict, id))
    }

    /// Number of chars from the root to this node
    pub fn depth(&self) -> usize {
        self.lineage().len()
    }

    /// Every node from the top-level ancestor down to this one
    pub fn lineage(&self) -> Vec<WordPath<'a>> {
        let mut lineage = vec![*self];
        let mut current = self.parent();
        while let Some(path) = current {
            lineage.push(path);
            current = path.parent();
        }
        lineage.reverse();
        lineage
    }

    /// The string spelled by the path
    pub fn path(&self) -> String {
        self.lineage().iter().map(WordPath::fork).collect()
    }
}

impl PartialEq for WordPath<'_> {
    fn eq(&self, other: &Self) -> bool {
        (std::ptr::eq(self.dict, other.dict) && self.id == other.id) || self.path() == other.path()
    }
}

impl Eq for WordPath<'_> {}

impl fmt::Debug for WordPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordPath")
            .field("path", &self.path())
            .field("terminal", &self.is_terminal())
            .finish()
    }
}

impl fmt::Display for WordPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Depth-first, pre-order traversal of every trie node in fork order
pub struct Iter<'a> {
    dict: &'a TrieDictionary,
    stack: Vec<slice::Iter<'a, (char, NodeId)>>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(dict: &'a TrieDictionary) -> Self {
        Self {
            dict,
            stack: vec![dict.roots().iter()],
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = WordPath<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(&(_, id)) => {
                    let branches = &self.dict.node(id).branches;
                    if !branches.is_empty() {
                        self.stack.push(branches.iter());
                    }
                    return Some(WordPath::new(self.dict, id));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
