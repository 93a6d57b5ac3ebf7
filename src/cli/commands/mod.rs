pub mod build;
pub mod config;
pub mod validate;

use crate::config::Config;
use crate::core::{ParseOptions, TimePrecedence};

/// How a command ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Nothing to report.
    Clean,
    /// The run completed but some rows were rejected.
    WithErrors,
}

impl RunStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::WithErrors => 2,
        }
    }
}

/// Parser options from the configuration, with an optional CLI override.
pub(crate) fn parse_options(cfg: &Config, precedence: Option<TimePrecedence>) -> ParseOptions {
    let mut options = cfg.parse_options();
    if let Some(p) = precedence {
        options.time_precedence = p;
    }
    options
}
