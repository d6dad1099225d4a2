//! Domain errors raised by the autocomplete engine.

use thiserror::Error;

/// Errors surfaced by [`AutocompleteEngine`](crate::engine::AutocompleteEngine) queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutocompleteError {
    /// The normalized fragment starts with a character that has no root node.
    #[error("invalid prefix: no root node for '{0}' (expected a letter a-z)")]
    InvalidPrefix(char),
}
