//! Run log: one timestamped line per event, appended to the configured file.
//!
//! Writing the log is never allowed to abort a command; the convenience
//! helpers print a warning and carry on.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append `YYYY-MM-DD HH:MM:SS [LEVEL] operation: message`.
    pub fn write(&self, level: Level, operation: &str, message: &str) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let now = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{now} [{}] {operation}: {message}", level.as_str())?;
        Ok(())
    }

    pub fn info(&self, operation: &str, message: impl AsRef<str>) {
        self.write_or_warn(Level::Info, operation, message.as_ref());
    }

    pub fn warn(&self, operation: &str, message: impl AsRef<str>) {
        self.write_or_warn(Level::Warn, operation, message.as_ref());
    }

    pub fn error(&self, operation: &str, message: impl AsRef<str>) {
        self.write_or_warn(Level::Error, operation, message.as_ref());
    }

    fn write_or_warn(&self, level: Level, operation: &str, message: &str) {
        if let Err(e) = self.write(level, operation, message) {
            warning(format!(
                "Failed to write run log {}: {}",
                self.path.display(),
                e
            ));
        }
    }
}
