//! confsift CLI entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::analyze::AnalyzeArgs;

#[derive(Debug, Parser)]
#[command(name = "confsift", version, about = "Extracts and ranks session listings from conference program PDFs")]
struct Cli {
    /// Verbose logging (debug level) on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a program document and print or export its sessions.
    Analyze(AnalyzeArgs),
    /// Inspect the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Show current configuration as TOML.
    Show,
    /// Print the config file path.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::handle(args),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
        },
    }
}
