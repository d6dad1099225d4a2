//! Load command implementation.

use std::fs::File;
use std::io::BufReader;

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to train on the contents of a text file.
pub struct LoadCommand;

impl Command for LoadCommand {
    fn name(&self) -> &str {
        "load"
    }

    fn aliases(&self) -> &[&str] {
        &["l"]
    }

    fn description(&self) -> &str {
        "Learn words from a text file"
    }

    fn usage(&self) -> &str {
        "load <path>"
    }

    fn help(&self) -> &str {
        "Read a text file and train on every line of it.\n\n\
         Arguments:\n  \
           <path> - File to read\n\n\
         Examples:\n  \
           load ~/books/moby-dick.txt"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!("Usage: {}\nMissing file path", self.usage()));
        }

        let path = args.join(" ");
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Could not open '{}': {}", path, e);
                return CommandResult::error(format!("Failed to open '{}': {}", path, e));
            }
        };

        match ctx.engine.train_reader(BufReader::new(file)) {
            Ok(report) => {
                log::info!(
                    "Loaded '{}': {} word(s), {} skipped",
                    path,
                    report.accepted,
                    report.skipped
                );
                CommandResult::success(format!(
                    "Learned {} word(s) from '{}' ({} known)",
                    report.accepted,
                    path,
                    ctx.engine.len()
                ))
            }
            Err(e) => CommandResult::error(format!("Failed to read '{}': {:#}", path, e)),
        }
    }

    fn min_args(&self) -> usize {
        1
    }
}
