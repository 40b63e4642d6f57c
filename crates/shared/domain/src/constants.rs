//! Well-known locations inside a generated classifier project.

/// Project name used when the scaffold generator is not told otherwise.
pub const DEFAULT_PROJECT_NAME: &str = "cnnClassifier";

/// Pipeline configuration file, relative to the project root.
pub const CONFIG_FILE_PATH: &str = "config/config.yaml";

/// Training hyper-parameter file, relative to the project root.
pub const PARAMS_FILE_PATH: &str = "params.yaml";

/// Prefix of environment variables that override settings (`CNN__LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "CNN";
