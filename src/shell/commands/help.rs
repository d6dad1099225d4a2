//! Help command implementation.

use crate::shell::command::{Command, CommandResult, CompletionSource, ShellContext};

/// Command to display help information.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["h", "?"]
    }

    fn description(&self) -> &str {
        "Display help information"
    }

    fn usage(&self) -> &str {
        "help [command]"
    }

    fn help(&self) -> &str {
        "Display help information about commands.\n\n\
         Without arguments, lists all available commands.\n\
         With a command name, shows detailed help for that command.\n\n\
         Examples:\n  \
           help\n  \
           help suggest\n  \
           ? train"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let Some(registry) = ctx.registry else {
            return CommandResult::error("Help not available (no registry)");
        };

        if args.is_empty() {
            let mut output = String::from("Available commands:\n\n");

            let mut commands: Vec<_> = registry.commands().collect();
            commands.sort_by_key(|c| c.name());

            for cmd in commands {
                let aliases = cmd.aliases();
                let alias_str = if aliases.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", aliases.join(", "))
                };

                output.push_str(&format!(
                    "  {:<10}{} - {}\n",
                    cmd.name(),
                    alias_str,
                    cmd.description()
                ));
            }

            output.push_str("\nType 'help <command>' for detailed help on a specific command.");
            return CommandResult::success(output);
        }

        let cmd_name = args[0];
        match registry.get(cmd_name) {
            Some(cmd) => {
                let aliases = cmd.aliases();
                let alias_str = if aliases.is_empty() {
                    String::new()
                } else {
                    format!("\nAliases: {}", aliases.join(", "))
                };

                CommandResult::success(format!(
                    "{}\n\nUsage: {}{}\n\n{}",
                    cmd.name().to_uppercase(),
                    cmd.usage(),
                    alias_str,
                    cmd.help()
                ))
            }
            None => CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            )),
        }
    }

    fn completions(&self, arg_index: usize, partial: &str, src: &CompletionSource) -> Vec<String> {
        if arg_index == 0 {
            src.registry.completions(partial)
        } else {
            vec![]
        }
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AutocompleteEngine;
    use crate::shell::command::CommandRegistry;
    use crate::shell::commands::register_all;

    fn setup_registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        registry
    }

    #[test]
    fn test_help_command_list_all() {
        let registry = setup_registry();
        let mut engine = AutocompleteEngine::new();
        let mut ctx = ShellContext::new(&mut engine).with_registry(&registry);

        match HelpCommand.execute(&[], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("Available commands"));
                for name in ["train", "suggest", "load", "help", "quit"] {
                    assert!(msg.contains(name), "missing {}", name);
                }
            }
            other => panic!("Expected help text, got {:?}", other),
        }
    }

    #[test]
    fn test_help_command_specific() {
        let registry = setup_registry();
        let mut engine = AutocompleteEngine::new();
        let mut ctx = ShellContext::new(&mut engine).with_registry(&registry);

        match HelpCommand.execute(&["s"], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("SUGGEST"));
                assert!(msg.contains("suggest <fragment>"));
            }
            other => panic!("Expected suggest help, got {:?}", other),
        }
    }

    #[test]
    fn test_help_command_unknown() {
        let registry = setup_registry();
        let mut engine = AutocompleteEngine::new();
        let mut ctx = ShellContext::new(&mut engine).with_registry(&registry);

        let result = HelpCommand.execute(&["nonexistent"], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_help_command_without_registry() {
        let mut engine = AutocompleteEngine::new();
        let mut ctx = ShellContext::new(&mut engine);

        let result = HelpCommand.execute(&[], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_help_completes_command_names() {
        let registry = setup_registry();
        let engine = AutocompleteEngine::new();
        let src = CompletionSource {
            engine: &engine,
            registry: &registry,
        };

        assert_eq!(HelpCommand.completions(0, "su", &src), vec!["suggest"]);
    }
}
