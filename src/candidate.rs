use serde::{Deserialize, Serialize};

/// A single ranked suggestion returned by a query.
///
/// Candidates are plain values copied out of the trie, so training after a
/// query never changes a previously returned list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The complete word being suggested.
    pub suggestion: String,
    /// Number of times the word was trained.
    pub likelihood: u32,
    /// Reserved for relative ranking across a result set; never populated today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

impl Candidate {
    pub fn new(suggestion: impl Into<String>, likelihood: u32) -> Self {
        Self {
            suggestion: suggestion.into(),
            likelihood,
            probability: None,
        }
    }
}
