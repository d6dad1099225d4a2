//! Syntax highlighting for the shell.

use rustyline::highlight::{CmdKind, Highlighter};
use std::borrow::Cow;
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

/// ANSI color codes for highlighting.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// Highlighter for shell input with syntax coloring.
pub struct ShellHighlighter {
    registry: Arc<CommandRegistry>,
}

impl ShellHighlighter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Highlights a line of input.
    fn highlight_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let Some(command) = trimmed.split_whitespace().next() else {
            return line.to_string();
        };

        let leading_ws = &line[..line.len() - trimmed.len()];
        let rest = &trimmed[command.len()..];

        let mut result = String::with_capacity(line.len() + 32);
        result.push_str(leading_ws);

        let arg_color = match self.registry.get(command) {
            Some(cmd) => {
                result.push_str(colors::BOLD);
                result.push_str(colors::CYAN);
                argument_color(cmd.name())
            }
            None => {
                result.push_str(colors::RED);
                colors::WHITE
            }
        };
        result.push_str(command);
        result.push_str(colors::RESET);

        paint_words(rest, arg_color, &mut result);
        result
    }
}

/// Color used for the arguments of a command, by primary name.
fn argument_color(command: &str) -> &'static str {
    match command {
        "train" => colors::GREEN,
        "suggest" => colors::MAGENTA,
        "load" | "help" => colors::YELLOW,
        _ => colors::WHITE,
    }
}

/// Colors each whitespace-separated word in `text`, preserving the whitespace.
fn paint_words(text: &str, color: &str, out: &mut String) {
    let mut in_word = false;
    for ch in text.chars() {
        let is_word = !ch.is_whitespace();
        if is_word && !in_word {
            out.push_str(color);
        } else if !is_word && in_word {
            out.push_str(colors::RESET);
        }
        in_word = is_word;
        out.push(ch);
    }
    if in_word {
        out.push_str(colors::RESET);
    }
}

impl Highlighter for ShellHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(format!(
            "{}{}{}{}",
            colors::BOLD,
            colors::BRIGHT_GREEN,
            prompt,
            colors::RESET
        ))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("{}{}{}", colors::DIM, hint, colors::RESET))
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        _completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        Cow::Owned(format!(
            "{}{}{}",
            colors::BRIGHT_CYAN,
            candidate,
            colors::RESET
        ))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Colored messages printed by the shell itself.
pub struct OutputHighlighter;

impl OutputHighlighter {
    /// Formats an error message.
    pub fn error(msg: &str) -> String {
        format!("{}{}{}", colors::BRIGHT_RED, msg, colors::RESET)
    }
}
