//! Quit command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to exit the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }

    fn description(&self) -> &str {
        "Exit the shell"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn help(&self) -> &str {
        "Exit the shell. Learned words are kept in memory only and are\n\
         discarded on exit.\n\n\
         Examples:\n  \
           quit\n  \
           exit\n  \
           q"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        log::info!("User requested exit ({} distinct words known)", ctx.engine.len());
        CommandResult::Exit
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AutocompleteEngine;

    #[test]
    fn test_quit_command() {
        let mut engine = AutocompleteEngine::new();
        let mut ctx = ShellContext::new(&mut engine);

        let result = QuitCommand.execute(&[], &mut ctx);

        assert!(matches!(result, CommandResult::Exit));
    }
}
