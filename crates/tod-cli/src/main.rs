//! CLI host for the truth-or-dare card engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tod",
    about = "Truth or dare — fair, resumable card draws from prompt packages",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the packages available in the catalog
    Packages {
        /// Path to the catalog file
        #[arg(short, long, default_value = "packages.json")]
        catalog: PathBuf,
    },

    /// Play an interactive game
    Play {
        /// Path to the catalog file
        #[arg(short, long, default_value = "packages.json")]
        catalog: PathBuf,

        /// Comma-separated package ids (default: the last selection)
        #[arg(short, long, value_delimiter = ',')]
        packages: Vec<u32>,

        /// Directory for saved sessions and settings
        #[arg(long, default_value = ".tod")]
        state_dir: PathBuf,

        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,

        /// Start fresh even if a session is saved
        #[arg(long)]
        new: bool,
    },

    /// Show the saved session, if any
    Status {
        /// Directory for saved sessions and settings
        #[arg(long, default_value = ".tod")]
        state_dir: PathBuf,
    },

    /// Delete the saved session
    Reset {
        /// Directory for saved sessions and settings
        #[arg(long, default_value = ".tod")]
        state_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Packages { catalog } => commands::packages::run(&catalog),
        Commands::Play {
            catalog,
            packages,
            state_dir,
            seed,
            new,
        } => commands::play::run(&catalog, &packages, &state_dir, seed, new),
        Commands::Status { state_dir } => commands::status::run(&state_dir),
        Commands::Reset { state_dir } => commands::reset::run(&state_dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
