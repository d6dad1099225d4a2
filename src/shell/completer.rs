//! Tab completion for the shell.
//!
//! Command names come from the registry; arguments are completed by the
//! command itself, which for `suggest` means ranked words from the engine.

use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::sync::{Arc, RwLock};

use crate::engine::AutocompleteEngine;
use crate::shell::command::{CommandRegistry, CompletionSource};

/// Completer that handles both command and argument completion.
pub struct ShellCompleter {
    registry: Arc<CommandRegistry>,
    engine: Arc<RwLock<AutocompleteEngine>>,
}

/// Context for completion - are we completing a command or an argument?
#[derive(Debug)]
pub(crate) enum CompletionContext<'a> {
    Command {
        partial: &'a str,
    },
    Argument {
        command: &'a str,
        arg_index: usize,
        partial: &'a str,
    },
}

/// Works out what the word under the cursor is.
pub(crate) fn parse_context(line: &str, pos: usize) -> CompletionContext<'_> {
    let line_to_pos = &line[..pos];
    let parts: Vec<&str> = line_to_pos.split_whitespace().collect();

    if parts.is_empty() {
        return CompletionContext::Command { partial: "" };
    }

    let ends_with_space = line_to_pos.ends_with(char::is_whitespace);

    if parts.len() == 1 && !ends_with_space {
        return CompletionContext::Command { partial: parts[0] };
    }

    let (arg_index, partial) = if ends_with_space {
        (parts.len() - 1, "")
    } else {
        (parts.len() - 2, parts[parts.len() - 1])
    };

    CompletionContext::Argument {
        command: parts[0],
        arg_index,
        partial,
    }
}

impl ShellCompleter {
    pub fn new(registry: Arc<CommandRegistry>, engine: Arc<RwLock<AutocompleteEngine>>) -> Self {
        Self { registry, engine }
    }

    /// Gets completions for a command name.
    fn complete_command(&self, partial: &str) -> Vec<Pair> {
        to_pairs(self.registry.completions(partial))
    }

    /// Asks the named command to complete one of its arguments.
    fn complete_argument(&self, command: &str, arg_index: usize, partial: &str) -> Vec<Pair> {
        let Some(cmd) = self.registry.get(command) else {
            return vec![];
        };
        let Ok(engine) = self.engine.read() else {
            log::warn!("Engine lock poisoned; skipping completion");
            return vec![];
        };

        let src = CompletionSource {
            engine: &engine,
            registry: &self.registry,
        };
        to_pairs(cmd.completions(arg_index, partial, &src))
    }
}

fn to_pairs(words: Vec<String>) -> Vec<Pair> {
    words
        .into_iter()
        .map(|s| Pair {
            display: s.clone(),
            replacement: s,
        })
        .collect()
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match parse_context(line, pos) {
            CompletionContext::Command { partial } => {
                Ok((pos - partial.len(), self.complete_command(partial)))
            }
            CompletionContext::Argument {
                command,
                arg_index,
                partial,
            } => Ok((
                pos - partial.len(),
                self.complete_argument(command, arg_index, partial),
            )),
        }
    }
}
