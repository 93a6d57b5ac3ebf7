use crate::core::{ParseOptions, TimePrecedence};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `build` writes its reports (and `validate` its errors.csv).
    pub output_dir: String,
    /// Run log, appended on every command.
    pub log_file: String,
    /// Which time encoding wins when a row has both start/end and minutes.
    pub time_precedence: TimePrecedence,
    pub allow_zero_minutes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "reports".to_string(),
            log_file: "logs/run.log".to_string(),
            time_precedence: TimePrecedence::StartEnd,
            allow_zero_minutes: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.worklog)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = self.to_yaml()?;

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            time_precedence: self.time_precedence,
            allow_zero_minutes: self.allow_zero_minutes,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }
}
