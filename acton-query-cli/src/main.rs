use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;

use commands::parse::ParseArgs;

/// acton-query - inspect query string directives
#[derive(Parser)]
#[command(name = "acton-query")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to the standard search paths)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<String>,

    /// Log skipped entries to stderr, overriding the configured log level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query string and print the directives as JSON
    Parse(ParseArgs),
    /// Print the effective configuration as TOML
    Config,
}

fn main() {
    let cli = Cli::parse();

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        commands::init_logging(&config, cli.verbose);
        match cli.command {
            Commands::Parse(args) => commands::parse::execute(&config, args),
            Commands::Config => commands::config::execute(&config),
        }
    });

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            if let Some(source) = e.source() {
                eprintln!("\n{} {}", "Caused by:".yellow(), source);
            }

            std::process::exit(1);
        }
    }
}
