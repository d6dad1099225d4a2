use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autocomplete")]
#[command(version = "0.1")]
#[command(about = "Learns word frequencies and suggests completions", long_about = None)]
pub struct Cli {
    /// Path to a JSON config file (defaults to ~/.autocomplete/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level for the log file (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Text file to train on before starting; may be repeated
    #[arg(long = "corpus", global = true)]
    pub corpora: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell (default).
    Shell,
    /// Print suggestions for a fragment and exit.
    Suggest {
        /// Fragment to complete
        fragment: String,
        /// Emit candidates as JSON
        #[arg(long)]
        json: bool,
        /// Maximum number of candidates to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
