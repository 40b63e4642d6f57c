use cnn_domain::constants::ENV_PREFIX;
use cnn_error::format_context;
use config::{Case, Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Custom error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

cnn_error::error_context! {
    pub trait ConfigErrorExt for ConfigError {
        variants: [Config],
        sources: [Config(config::ConfigError)],
    }
}

/// A reusable settings loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: the file at `path`, when given. It must exist; the format follows the
///    extension, and an extension-less path is probed as `path.toml`, `path.yaml`, `path.json`, ...
/// 2. **Environment Overrides**: variables prefixed with `CNN__`. Nested fields are reached with
///    double underscores (`CNN__LOGGING__LEVEL` maps to `logging.level`).
///
/// Fields absent from every layer come from the `#[serde(default)]` of `T`.
///
/// # Errors
/// This function will return an error if:
/// * The given settings file cannot be found or parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use cnn_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct PipelineSettings {
///     epochs: u32,
/// }
///
/// let settings: PipelineSettings = load_config(Some("config/pipeline")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path: Option<&Path> = path.as_ref().map(|p| p.as_ref());
    load(path, environment())
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process environment.
///
/// Keys use the environment form, e.g. `("CNN__LOGGING__LEVEL", "debug")`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_vars<T, I, K, V>(
    path: Option<impl AsRef<Path>>,
    vars: I,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let path: Option<&Path> = path.as_ref().map(|p| p.as_ref());
    let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    load(path, environment().source(Some(vars)))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(Case::Snake)
}

fn load<T: DeserializeOwned>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!(path = %path.display(), "Loading settings");
        builder = builder.add_source(File::from(path).required(true));
    }

    builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
