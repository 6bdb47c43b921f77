//! Refract CLI - inspect the reflection of parsed PHP files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Refract - reflect functions and imports out of PHP syntax trees
#[derive(Parser)]
#[command(name = "refract")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the namespace and imports of every namespace block
    Context {
        /// Syntax tree of the file, as JSON
        ast: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the functions declared in a file
    Functions {
        /// Syntax tree of the file(s), as JSON
        #[arg(required = true)]
        asts: Vec<PathBuf>,
        /// Original PHP source, used to report line numbers (single file only)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Context { ast, json } => commands::context::run(&ast, json),
        Commands::Functions { asts, source, json } => {
            commands::functions::run(&asts, source.as_deref(), json, cli.verbose)
        }
    }
}
