//! Shell module - rustyline-based interactive front end for the engine.
//!
//! This module provides a shell-like interface with:
//! - Command completion, including ranked word completion for `suggest`
//! - Syntax highlighting
//! - Command history
//! - Inline hints that follow the top suggestion as you type

pub mod command;
pub mod commands;
pub mod completer;
pub mod highlighter;
pub mod hints;
pub mod history;

use anyhow::{Result, anyhow};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::{
    MatchingBracketValidator, ValidationContext, ValidationResult, Validator,
};
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow;
use std::sync::{Arc, RwLock};

use crate::config::AppConfig;
use crate::engine::AutocompleteEngine;
use crate::logging::timed;

use command::{CommandRegistry, CommandResult, DEFAULT_SUGGESTION_LIMIT, ShellContext};
use commands::register_all;
use completer::ShellCompleter;
use highlighter::{OutputHighlighter, ShellHighlighter};
use hints::ShellHinter;
use history::HistoryConfig;

/// The prompt displayed to the user.
const PROMPT: &str = "autocomplete> ";

/// Combined helper for rustyline that provides all shell features.
pub struct ShellHelper {
    completer: ShellCompleter,
    highlighter: ShellHighlighter,
    hinter: ShellHinter,
    validator: MatchingBracketValidator,
}

impl ShellHelper {
    pub fn new(registry: Arc<CommandRegistry>, engine: Arc<RwLock<AutocompleteEngine>>) -> Self {
        Self {
            completer: ShellCompleter::new(Arc::clone(&registry), Arc::clone(&engine)),
            highlighter: ShellHighlighter::new(Arc::clone(&registry)),
            hinter: ShellHinter::new(registry, engine),
            validator: MatchingBracketValidator::new(),
        }
    }
}

impl Completer for ShellHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        self.highlighter.highlight_prompt(prompt, default)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        self.highlighter.highlight_hint(hint)
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        self.highlighter.highlight_candidate(candidate, completion)
    }

    fn highlight_char(&self, line: &str, pos: usize, kind: rustyline::highlight::CmdKind) -> bool {
        self.highlighter.highlight_char(line, pos, kind)
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Validator for ShellHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        self.validator.validate(ctx)
    }
}

impl Helper for ShellHelper {}

/// Configuration for the shell.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub history: HistoryConfig,
    pub show_welcome: bool,
    /// Maximum suggestions printed by `suggest`.
    pub suggestion_limit: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            show_welcome: true,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl From<&AppConfig> for ShellConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            history: HistoryConfig::new(config.history_path())
                .with_max_entries(config.history_max_entries),
            show_welcome: config.show_welcome,
            suggestion_limit: config.suggestion_limit,
        }
    }
}

/// The interactive shell.
///
/// The engine sits behind a `RwLock`: commands take the write lock for
/// their whole run, completion and hints take the read lock per query.
pub struct Shell {
    registry: Arc<CommandRegistry>,
    engine: Arc<RwLock<AutocompleteEngine>>,
    config: ShellConfig,
}

impl Shell {
    /// Creates a shell around `engine` with default configuration.
    pub fn new(engine: AutocompleteEngine) -> Self {
        Self::with_config(engine, ShellConfig::default())
    }

    pub fn with_config(engine: AutocompleteEngine, config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self {
            registry: Arc::new(registry),
            engine: Arc::new(RwLock::new(engine)),
            config,
        }
    }

    /// Shared handle to the engine driven by this shell.
    pub fn engine(&self) -> Arc<RwLock<AutocompleteEngine>> {
        Arc::clone(&self.engine)
    }

    /// Runs the interactive read-eval-print loop until quit or EOF.
    pub fn run(&self) -> Result<()> {
        let helper = ShellHelper::new(Arc::clone(&self.registry), Arc::clone(&self.engine));

        let mut editor: Editor<ShellHelper, FileHistory> = Editor::new()?;
        editor.set_helper(Some(helper));
        self.config.history.load_into(&mut editor)?;

        if self.config.show_welcome {
            println!("Type 'help' for available commands, 'train <text>' to teach me words.");
        }

        log::info!("Shell started");

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = editor.add_history_entry(line);

                    match self.execute_line(line)? {
                        CommandResult::Success(Some(msg)) => println!("{}", msg),
                        CommandResult::Success(None) | CommandResult::Continue => {}
                        CommandResult::Error(msg) => {
                            eprintln!("{}", OutputHighlighter::error(&msg));
                        }
                        CommandResult::Exit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    log::debug!("Interrupted (Ctrl-C)");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("exit");
                    log::info!("EOF received (Ctrl-D)");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", OutputHighlighter::error(&format!("Error: {}", err)));
                    log::error!("Readline error: {}", err);
                    break;
                }
            }
        }

        if let Err(e) = self.config.history.save_from(&mut editor) {
            log::warn!("Failed to save history: {}", e);
        }

        log::info!("Shell exited");
        Ok(())
    }

    /// Parses and executes one command line against the engine.
    pub fn execute_line(&self, line: &str) -> Result<CommandResult> {
        let mut engine = self
            .engine
            .write()
            .map_err(|e| anyhow!("Engine lock poisoned: {}", e))?;
        let mut ctx = ShellContext::new(&mut engine)
            .with_registry(&self.registry)
            .with_suggestion_limit(self.config.suggestion_limit);

        Ok(self.execute_with_context(line, &mut ctx))
    }

    /// Executes a command with the given context.
    fn execute_with_context(&self, line: &str, ctx: &mut ShellContext) -> CommandResult {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd_name, args)) = parts.split_first() else {
            return CommandResult::Continue;
        };

        log::debug!("Executing command: {} with args: {:?}", cmd_name, args);

        let Some(cmd) = self.registry.get(cmd_name) else {
            return CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            ));
        };

        if let Some(max) = cmd.max_args() {
            if args.len() > max {
                return CommandResult::error(format!(
                    "Usage: {}\nToo many arguments",
                    cmd.usage()
                ));
            }
        }

        timed(&format!("Command '{}'", cmd.name()), || cmd.execute(args, ctx))
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(AutocompleteEngine::new())
    }
}
