//! Command trait and registry for the shell.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::engine::AutocompleteEngine;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Command executed successfully with optional message.
    Success(Option<String>),
    /// Command failed with error message.
    Error(String),
    /// Signal to exit the shell.
    Exit,
    /// Continue without output.
    Continue,
}

impl CommandResult {
    /// Creates a success result with a message.
    pub fn success(msg: impl Into<String>) -> Self {
        CommandResult::Success(Some(msg.into()))
    }

    /// Creates an error result.
    pub fn error(msg: impl Into<String>) -> Self {
        CommandResult::Error(msg.into())
    }
}

/// Default number of suggestions printed per query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// State available to commands during execution.
pub struct ShellContext<'a> {
    /// The engine being trained and queried.
    pub engine: &'a mut AutocompleteEngine,
    /// Registry reference for the help command.
    pub registry: Option<&'a CommandRegistry>,
    /// Maximum number of suggestions to print.
    pub suggestion_limit: usize,
}

impl<'a> ShellContext<'a> {
    pub fn new(engine: &'a mut AutocompleteEngine) -> Self {
        Self {
            engine,
            registry: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_registry(mut self, registry: &'a CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }
}

/// Read-only state consulted while completing or hinting arguments.
pub struct CompletionSource<'a> {
    pub engine: &'a AutocompleteEngine,
    pub registry: &'a CommandRegistry,
}

/// A command that can be executed in the shell.
pub trait Command: Send + Sync {
    /// Returns the primary name of the command.
    fn name(&self) -> &str;

    /// Returns command aliases (alternative names).
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Returns a short description of the command.
    fn description(&self) -> &str;

    /// Returns usage information (e.g., "suggest <fragment>").
    fn usage(&self) -> &str;

    /// Returns detailed help text.
    fn help(&self) -> &str {
        self.description()
    }

    /// Executes the command with the given arguments.
    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult;

    /// Returns completions for the command's arguments, best first.
    ///
    /// `arg_index` is the 0-based index of the argument being completed.
    fn completions(&self, _arg_index: usize, _partial: &str, _src: &CompletionSource) -> Vec<String> {
        vec![]
    }

    /// Returns the minimum number of required arguments.
    fn min_args(&self) -> usize {
        0
    }

    /// Returns the maximum number of arguments (None = unlimited).
    fn max_args(&self) -> Option<usize> {
        None
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("description", &self.description())
            .finish()
    }
}

/// Registry of all available commands.
pub struct CommandRegistry {
    /// Commands indexed by their primary name.
    commands: HashMap<String, Arc<dyn Command>>,
    /// Alias to primary name mapping.
    aliases: HashMap<String, String>,
    /// Command names and aliases, for completion.
    name_index: AutocompleteEngine,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
            name_index: AutocompleteEngine::new(),
        }
    }

    /// Registers a command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        self.name_index.train(&name);

        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
            self.name_index.train(alias);
        }

        self.commands.insert(name, command);
    }

    /// Looks up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(Arc::clone(cmd));
        }

        self.aliases
            .get(name)
            .and_then(|primary| self.commands.get(primary))
            .map(Arc::clone)
    }

    /// Returns all registered commands.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Returns command names and aliases starting with `prefix`, sorted.
    ///
    /// An empty prefix lists everything, including symbolic aliases.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            let mut all: Vec<String> = self
                .commands
                .keys()
                .chain(self.aliases.keys())
                .cloned()
                .collect();
            all.sort();
            return all;
        }

        // Every name is trained exactly once, so ranking falls back to alphabetical.
        self.name_index
            .suggest(prefix)
            .map(|found| found.into_iter().map(|c| c.suggestion).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCommand;

    impl Command for TestCommand {
        fn name(&self) -> &str {
            "test"
        }

        fn aliases(&self) -> &[&str] {
            &["t", "tst", "!"]
        }

        fn description(&self) -> &str {
            "A test command"
        }

        fn usage(&self) -> &str {
            "test [args...]"
        }

        fn execute(&self, args: &[&str], _ctx: &mut ShellContext) -> CommandResult {
            if args.is_empty() {
                CommandResult::Success(None)
            } else {
                CommandResult::success(format!("Args: {:?}", args))
            }
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TestCommand));

        assert!(registry.get("test").is_some());
        assert!(registry.get("t").is_some());
        assert!(registry.get("!").is_some());
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_completions() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TestCommand));

        assert_eq!(registry.completions("te"), vec!["test"]);
        assert_eq!(registry.completions("t"), vec!["t", "test", "tst"]);
        assert!(registry.completions("x").is_empty());
        assert!(registry.completions("9").is_empty());
    }

    #[test]
    fn test_registry_completions_empty_prefix() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TestCommand));

        assert_eq!(registry.completions(""), vec!["!", "t", "test", "tst"]);
    }

    #[test]
    fn test_command_result() {
        let success = CommandResult::success("done");
        assert!(matches!(success, CommandResult::Success(Some(_))));

        let error = CommandResult::error("failed");
        assert!(matches!(error, CommandResult::Error(_)));
    }
}
