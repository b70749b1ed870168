use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

/// The command line interface for the user registry.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a configuration file with users to seed the registry with
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Level of logs written to stderr
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,

    /// Also write debug logs to daily rotated files in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Commands available in the command line interface.
#[derive(Subcommand)]
pub enum Commands {
    /// Examples for user convenience.
    #[clap(subcommand)]
    Examples(Examples),

    /// Show the stored users as JSON, in the order they were added.
    Users,

    /// Show the stored users as a JSON object keyed by id.
    MappedById,

    /// Show the first user matching the credentials as JSON, or `null`.
    Login {
        /// The user's name
        username: String,

        /// The user's password
        password: String,
    },
}

/// Helpful examples for users.
#[derive(Subcommand, Clone)]
pub enum Examples {
    /// Show an example of a configuration file's contents.
    Config,
}
