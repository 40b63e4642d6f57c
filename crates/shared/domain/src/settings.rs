use crate::constants::{CONFIG_FILE_PATH, PARAMS_FILE_PATH};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level application settings.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub artifacts: ArtifactSettings,
}

/// Console and file logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Directory holding the log file. `None` disables file output.
    pub dir: Option<PathBuf>,
    pub file_name: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`, `off`.
    pub level: String,
    /// Module-directed filter such as `cnn_common=debug`; overrides `level` and `RUST_LOG`.
    pub filter: Option<String>,
    pub console: bool,
    pub json: bool,
}

/// Where pipeline inputs and outputs live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArtifactSettings {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub params_file: PathBuf,
}

// --- Default ---

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: Some(PathBuf::from("logs")),
            file_name: "running_logs.log".to_owned(),
            level: "info".to_owned(),
            filter: None,
            console: true,
            json: false,
        }
    }
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("artifacts"),
            config_file: PathBuf::from(CONFIG_FILE_PATH),
            params_file: PathBuf::from(PARAMS_FILE_PATH),
        }
    }
}
