//! Frequency-counting prefix tree.
//!
//! Every node carries the full prefix it represents, so a subtree walk can
//! emit candidates without rebuilding strings along the way.

use std::collections::HashMap;

use crate::candidate::Candidate;

/// A node in the trie.
///
/// A node with `occurrences == 0` only routes towards longer words. A node
/// with `occurrences > 0` is a trained word and may still have children.
#[derive(Debug, Default)]
pub struct TrieNode {
    fragment: String,
    children: HashMap<char, TrieNode>,
    occurrences: u32,
}

impl TrieNode {
    /// Creates an empty node for the given prefix.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            children: HashMap::new(),
            occurrences: 0,
        }
    }

    /// The prefix this node represents.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Number of times this exact fragment was trained as a word.
    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    #[cfg(test)]
    fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Records one more occurrence of `word` beneath this node.
    ///
    /// Missing intermediate nodes are created on the way down. Returns the
    /// word's new occurrence count, or 0 if `word` does not extend this
    /// node's fragment.
    pub fn insert(&mut self, word: &str) -> u32 {
        let Some(rest) = word.strip_prefix(self.fragment.as_str()) else {
            log::warn!(
                "Refusing to insert '{}' under unrelated node '{}'",
                word,
                self.fragment
            );
            return 0;
        };

        let offset = self.fragment.len();
        let mut current = self;
        for (idx, ch) in rest.char_indices() {
            let end = offset + idx + ch.len_utf8();
            current = current
                .children
                .entry(ch)
                .or_insert_with(|| TrieNode::new(&word[..end]));
        }

        current.occurrences = current.occurrences.saturating_add(1);
        log::trace!("'{}' now seen {} time(s)", word, current.occurrences);
        current.occurrences
    }

    /// Finds the node whose fragment equals `prefix` exactly.
    pub fn locate(&self, prefix: &str) -> Option<&TrieNode> {
        let rest = prefix.strip_prefix(self.fragment.as_str())?;

        let mut current = self;
        for ch in rest.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    /// Returns every trained word at or beneath the node matching `prefix`.
    ///
    /// The list is unordered; ranking is left to the caller.
    pub fn find_candidates(&self, prefix: &str) -> Vec<Candidate> {
        match self.locate(prefix) {
            Some(node) => node.collect_candidates(),
            None => Vec::new(),
        }
    }

    /// Pre-order walk of this subtree, collecting every node that is a word.
    fn collect_candidates(&self) -> Vec<Candidate> {
        let mut results = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.occurrences > 0 {
                results.push(Candidate::new(node.fragment.clone(), node.occurrences));
            }
            stack.extend(node.children.values());
        }

        results
    }
}

// Tear subtrees down iteratively; the default drop recurses once per character.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
