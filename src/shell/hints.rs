//! Inline hints for the shell.
//!
//! While a command name is being typed the hint finishes it. While an
//! argument is being typed the hint shows the rest of the best completion,
//! so `suggest th` greys out the most frequent word starting with "th".

use rustyline::Context;
use rustyline::hint::Hinter;
use std::sync::{Arc, RwLock};

use crate::engine::AutocompleteEngine;
use crate::shell::command::{CommandRegistry, CompletionSource};
use crate::shell::completer::{CompletionContext, parse_context};

/// Hinter that queries the engine on every keystroke.
pub struct ShellHinter {
    registry: Arc<CommandRegistry>,
    engine: Arc<RwLock<AutocompleteEngine>>,
}

impl ShellHinter {
    pub fn new(registry: Arc<CommandRegistry>, engine: Arc<RwLock<AutocompleteEngine>>) -> Self {
        Self { registry, engine }
    }

    /// Computes the hint for a line with the cursor at its end.
    fn get_hint(&self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }

        match parse_context(line, line.len()) {
            CompletionContext::Command { partial } => {
                let completions = self.registry.completions(partial);
                match completions.as_slice() {
                    [only] => remainder(only, partial),
                    _ => None,
                }
            }
            CompletionContext::Argument {
                command,
                arg_index,
                partial,
            } => {
                let cmd = self.registry.get(command)?;
                if partial.is_empty() {
                    return usage_hint(cmd.usage(), cmd.name(), arg_index, cmd.min_args());
                }

                let engine = self.engine.read().ok()?;
                let src = CompletionSource {
                    engine: &engine,
                    registry: &self.registry,
                };
                let best = cmd.completions(arg_index, partial, &src).into_iter().next()?;
                remainder(&best, partial)
            }
        }
    }
}

/// The part of `word` still to be typed after `partial`.
///
/// Suggested words are lowercase, so the typed text is matched without case.
fn remainder(word: &str, partial: &str) -> Option<String> {
    word.strip_prefix(partial.to_lowercase().as_str())
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
}

/// Names the arguments still missing, e.g. `<fragment>`.
fn usage_hint(usage: &str, name: &str, arg_index: usize, min_args: usize) -> Option<String> {
    if arg_index >= min_args {
        return None;
    }
    let args: Vec<&str> = usage.strip_prefix(name)?.split_whitespace().collect();
    if arg_index < args.len() {
        Some(args[arg_index..].join(" "))
    } else {
        None
    }
}

impl Hinter for ShellHinter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        // Only hint if cursor is at end of line
        if pos < line.len() {
            return None;
        }

        self.get_hint(line)
    }
}
