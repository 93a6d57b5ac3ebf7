use crate::cli::commands::RunStatus;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<RunStatus> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(RunStatus::Clean)
}
