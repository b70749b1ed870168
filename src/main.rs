use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use serde::Serialize;
use tracing::{debug, Level};
use user_registry::{
    cli::{self, Commands, Examples},
    config::Config,
    error::Error,
    logging,
    registry::UserRegistry,
};

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).expect("Users only hold plain data")
}

fn load_registry(config_path: Option<PathBuf>) -> Result<UserRegistry, Error> {
    let config = if let Some(config_path) = config_path {
        debug!(?config_path, "Config from path");
        Config::new_from_path(config_path)?
    } else {
        debug!("Default config");
        Config::default()
    };

    Ok(UserRegistry::from_config(&config))
}

/// Carry out the command, producing what should be printed.
fn run(command: Option<Commands>, config_path: Option<PathBuf>) -> Result<String, Error> {
    let output = match command {
        Some(Commands::Examples(Examples::Config)) => Config::example().serialize_pretty(),
        Some(Commands::MappedById) => to_json(&load_registry(config_path)?.users_mapped_by_id()),
        Some(Commands::Login { username, password }) => {
            let registry = load_registry(config_path)?;
            to_json(&registry.login(Some(username.as_str()), Some(password.as_str()))?)
        }
        Some(Commands::Users) | None => to_json(&load_registry(config_path)?.users()),
    };

    Ok(output)
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(e) = logging::init(cli.log_level, cli.log_dir.map(|dir| (Level::DEBUG, dir))) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli.command, cli.config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
