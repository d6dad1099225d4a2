//! Train command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to learn words from a passage typed at the prompt.
pub struct TrainCommand;

impl Command for TrainCommand {
    fn name(&self) -> &str {
        "train"
    }

    fn aliases(&self) -> &[&str] {
        &["t", "learn"]
    }

    fn description(&self) -> &str {
        "Learn words from a passage"
    }

    fn usage(&self) -> &str {
        "train <text...>"
    }

    fn help(&self) -> &str {
        "Split the passage on whitespace and count every word.\n\n\
         Words are lowercased and stripped of punctuation. Words that do not\n\
         start with a letter are skipped.\n\n\
         Examples:\n  \
           train the cat sat on the mat\n  \
           t Hello, world!"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!("Usage: {}\nMissing text to learn", self.usage()));
        }

        let passage = args.join(" ");
        let report = ctx.engine.train(&passage);
        log::info!(
            "Trained {} word(s) from the prompt ({} skipped)",
            report.accepted,
            report.skipped
        );

        let mut msg = format!("Learned {} word(s)", report.accepted);
        if report.skipped > 0 {
            msg.push_str(&format!(", skipped {}", report.skipped));
        }
        CommandResult::success(msg)
    }

    fn min_args(&self) -> usize {
        1
    }
}
