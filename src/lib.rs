//! Autocomplete - a frequency-ranked, prefix-tree word suggester.
//!
//! This library learns word frequencies from free text and answers prefix
//! queries with ranked candidates. It also ships the interactive shell and
//! configuration used by the `autocomplete` binary.

pub mod candidate;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod roots;
pub mod shell;
pub mod trie;

// Re-export commonly used types
pub use candidate::Candidate;
pub use config::AppConfig;
pub use engine::{AutocompleteEngine, AutocompleteProvider, TrainReport};
pub use error::AutocompleteError;
pub use logging::{LogConfig, init_logging};
pub use shell::Shell;
