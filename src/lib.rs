//! worklog library root.
//! Exposes the CLI parser, the high-level run() function, the validation /
//! aggregation core and the input/report collaborators around it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod runlog;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::RunStatus;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use runlog::RunLog;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<RunStatus> {
    let log = RunLog::new(cfg.log_path());

    match &cli.command {
        Commands::Validate { .. } => cli::commands::validate::handle(&cli.command, cfg, &log),
        Commands::Build { .. } => cli::commands::build::handle(&cli.command, cfg, &log),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point usato da main.rs. Returns the process exit code.
pub fn run() -> AppResult<i32> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let config_path: PathBuf = cli
        .config_file
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ passa tutto al dispatcher
    let status = dispatch(&cli, &cfg, &config_path)?;
    Ok(status.exit_code())
}
