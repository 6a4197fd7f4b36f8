use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use eisenhower_core::Config;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "eisenhower", version, about = "Eisenhower matrix task manager")]
struct Cli {
    /// Config file to use instead of ~/.config/eisenhower/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session
    Shell,
    /// Apply JSON-line intents to a fresh store and print the matrix
    Run(commands::replay::RunArgs),
    /// Show the quadrant and priority for a score pair
    Classify(commands::classify::ClassifyArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::load_from(path)?;
    init_tracing(&config.logging.level);
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Completions { shell } = &cli.command {
        generate(*shell, &mut Cli::command(), "eisenhower", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };

    match cli.command {
        Commands::Shell => commands::shell::run(&load_config(&config_path)?),
        Commands::Run(args) => commands::replay::run(args, &load_config(&config_path)?),
        Commands::Classify(args) => commands::classify::run(args, &load_config(&config_path)?),
        Commands::Config { action } => {
            init_tracing("warn");
            commands::config::run(action, &config_path)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
