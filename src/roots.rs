//! Fixed per-letter entry points into the trie.

use crate::error::AutocompleteError;
use crate::trie::TrieNode;

/// One root node per lowercase ASCII letter, created once and never replaced.
#[derive(Debug)]
pub struct RootIndex {
    roots: [TrieNode; 26],
}

impl RootIndex {
    pub fn new() -> Self {
        Self {
            roots: std::array::from_fn(|i| TrieNode::new(char::from(b'a' + i as u8))),
        }
    }

    fn slot(first: char) -> Result<usize, AutocompleteError> {
        if first.is_ascii_lowercase() {
            Ok((first as u8 - b'a') as usize)
        } else {
            Err(AutocompleteError::InvalidPrefix(first))
        }
    }

    /// Returns the root for `first`, failing for anything outside `'a'..='z'`.
    pub fn route(&self, first: char) -> Result<&TrieNode, AutocompleteError> {
        Self::slot(first).map(|idx| &self.roots[idx])
    }

    /// Mutable variant of [`route`](Self::route), used while training.
    pub fn route_mut(&mut self, first: char) -> Result<&mut TrieNode, AutocompleteError> {
        Self::slot(first).map(|idx| &mut self.roots[idx])
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = &TrieNode> {
        self.roots.iter()
    }
}

impl Default for RootIndex {
    fn default() -> Self {
        Self::new()
    }
}
