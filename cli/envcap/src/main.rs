//! envcap CLI — resolve build-target identifiers into capability profiles.

mod commands;
mod manifest;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "envcap", version, about = "Target capability resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more targets into a single capability profile
    Resolve {
        /// Target identifiers (e.g. node14.5, web, es2020); defaults to the
        /// [build] targets of envcap.toml when omitted
        targets: Vec<String>,
        /// Print the profile as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List supported target patterns
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve { targets, json } => commands::resolve::run(&targets, json),
        Commands::List => commands::list::run(),
    }
}
