//! Suggest command implementation.

use crate::candidate::Candidate;
use crate::shell::command::{Command, CommandResult, CompletionSource, ShellContext};

/// Command to list ranked completions for a fragment.
pub struct SuggestCommand;

/// Renders ranked candidates one per line, most likely first.
fn format_candidates(candidates: &[Candidate], limit: usize) -> String {
    let width = candidates
        .iter()
        .take(limit)
        .map(|c| c.suggestion.len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = candidates
        .iter()
        .take(limit)
        .map(|c| format!("  {:<width$}  {}", c.suggestion, c.likelihood, width = width))
        .collect();

    if candidates.len() > limit {
        lines.push(format!("  ... and {} more", candidates.len() - limit));
    }
    lines.join("\n")
}

impl Command for SuggestCommand {
    fn name(&self) -> &str {
        "suggest"
    }

    fn aliases(&self) -> &[&str] {
        &["s", "complete"]
    }

    fn description(&self) -> &str {
        "Show known words starting with a fragment"
    }

    fn usage(&self) -> &str {
        "suggest <fragment>"
    }

    fn help(&self) -> &str {
        "List trained words that start with the fragment, most frequent first.\n\
         Words seen equally often are listed alphabetically.\n\n\
         Arguments:\n  \
           <fragment> - The beginning of a word (must start with a letter)\n\n\
         Examples:\n  \
           suggest th\n  \
           s ca"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!("Usage: {}\nMissing fragment", self.usage()));
        }

        let fragment = args[0];
        match ctx.engine.suggest(fragment) {
            Ok(candidates) if candidates.is_empty() => {
                CommandResult::success(format!("No suggestions for '{}'", fragment))
            }
            Ok(candidates) => {
                log::debug!("{} suggestion(s) for '{}'", candidates.len(), fragment);
                CommandResult::success(format_candidates(&candidates, ctx.suggestion_limit))
            }
            Err(e) => {
                log::debug!("Rejected fragment '{}': {}", fragment, e);
                CommandResult::error(e.to_string())
            }
        }
    }

    fn completions(&self, arg_index: usize, partial: &str, src: &CompletionSource) -> Vec<String> {
        if arg_index != 0 {
            return vec![];
        }
        src.engine
            .suggest(partial)
            .map(|found| found.into_iter().map(|c| c.suggestion).collect())
            .unwrap_or_default()
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
