use anyhow::{Context, Result};
use autocomplete::cli::{Cli, Commands};
use autocomplete::shell::ShellConfig;
use autocomplete::{AppConfig, AutocompleteEngine, AutocompleteError, LogConfig, Shell, init_logging};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_path()?,
    };
    let mut config = AppConfig::load(&config_path)?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_logging(&LogConfig::from_app(&config)?)?;

    let mut engine = AutocompleteEngine::new();
    for path in &cli.corpora {
        let file = File::open(path)
            .with_context(|| format!("Failed to open corpus {}", path.display()))?;
        let report = engine
            .train_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read corpus {}", path.display()))?;
        log::info!(
            "Trained on {}: {} word(s), {} skipped",
            path.display(),
            report.accepted,
            report.skipped
        );
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            Shell::with_config(engine, ShellConfig::from(&config)).run()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Suggest {
            fragment,
            json,
            limit,
        } => match engine.suggest(&fragment) {
            Ok(mut candidates) => {
                if let Some(limit) = limit {
                    candidates.truncate(limit);
                }
                if json {
                    println!("{}", serde_json::to_string_pretty(&candidates)?);
                } else {
                    for candidate in &candidates {
                        println!("{}\t{}", candidate.suggestion, candidate.likelihood);
                    }
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e @ AutocompleteError::InvalidPrefix(_)) => {
                eprintln!("Error: {}", e);
                Ok(ExitCode::from(2))
            }
        },
    }
}
