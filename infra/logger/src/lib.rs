//! # Logger
//!
//! Explicit logging setup for the classifier workspace.
//! A [`Logger`] is constructed once at application startup and then either installed as the
//! process-wide default ([`Logger::install`], [`LoggerBuilder::init`]) or handed to a block of
//! work as a scoped context ([`Logger::in_scope`]). Library crates only emit `tracing` events;
//! nothing is configured at import time.
//!
//! * Console output goes to stdout, or to stderr with [`ConsoleStream::Stderr`] when stdout
//!   carries program output.
//! * File output goes to a single append-only file, `logs/running_logs.log` by default,
//!   written by a non-blocking background worker. Time-based rotation is opt-in.
//! * Every line is rendered by [`BracketFormat`]:
//!   `[<timestamp>: <LEVEL>: <module>: <message>]`.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"cnn_common=debug"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use cnn_logger::{LevelFilter, Logger};
//! # let tmp = tempfile::tempdir().unwrap();
//! let logger = Logger::builder()
//!     .console(false)
//!     .level(LevelFilter::DEBUG)
//!     .path(tmp.path().join("logs"))
//!     .build()
//!     .unwrap();
//!
//! logger.in_scope(|| tracing::info!("written to logs/running_logs.log"));
//! ```

mod error;
mod format;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::format::{BracketFormat, TIMESTAMP_FORMAT};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;

/// Directory used for file logging when the caller has no preference.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Name of the append-only log file inside the log directory.
pub const DEFAULT_FILE_NAME: &str = "running_logs.log";

/// Stream that receives console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    console_stream: ConsoleStream,
    path: Option<PathBuf>,
    file_name: String,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            console_stream: ConsoleStream::default(),
            path: None,
            file_name: DEFAULT_FILE_NAME.to_owned(),
            level: LevelFilter::INFO,
            rotation: Rotation::NEVER,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring a [`Logger`].
///
/// File-only options (`file_name`, `rotation`, `max_files`, `json`) become available once
/// [`LoggerBuilder::path`] has been called.
#[derive(Debug)]
pub struct LoggerBuilder<F: Sealed = NoFile> {
    config: LoggerConfig,
    file_state: std::marker::PhantomData<F>,
}

impl LoggerBuilder<WithFile> {
    /// Sets the log file name inside the log directory.
    ///
    /// With [`Rotation::NEVER`] the name is used verbatim; with time-based rotation the date
    /// is inserted before the extension (`running_logs.2024-05-01.log`).
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.config.file_name = name.into();
        self
    }

    /// Configures maximum number of rotated log files to keep.
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes JSON lines to the log file instead of the bracketed layout.
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<F> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `cnn_common=debug,cnn_kernel=info`).
    ///
    /// When set, it replaces `RUST_LOG`. Invalid filters make [`LoggerBuilder::build`] fail.
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables console logging.
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Selects the console stream (stdout by default).
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub const fn console_stream(mut self, stream: ConsoleStream) -> Self {
        self.config.console_stream = stream;
        self
    }

    /// Sets the directory that holds the log file.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, file_state: std::marker::PhantomData }
    }

    /// Consumes the builder and assembles the logging pipeline without installing it.
    ///
    /// The log directory is created if needed. The returned [`Logger`] owns the background
    /// file writer; keep it alive for as long as events should reach the file.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings,
    /// [`LoggerError::Internal`] if the log directory cannot be created and
    /// [`LoggerError::Appender`] if the log file cannot be opened.
    pub fn build(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            let console = layer().event_format(BracketFormat).with_ansi(false);
            layers.push(match self.config.console_stream {
                ConsoleStream::Stdout => console.with_writer(std::io::stdout).boxed(),
                ConsoleStream::Stderr => console.with_writer(std::io::stderr).boxed(),
            });
        }

        let (guard, log_dir) = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let (prefix, suffix) = split_file_name(&self.config.file_name);
            let mut appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(prefix)
                .max_log_files(self.config.max_files);
            if let Some(suffix) = suffix {
                appender = appender.filename_suffix(suffix);
            }
            let file_appender = appender
                .build(&path)
                .context(format!("Failed to open log file in {}", path.display()))?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let boxed = if self.config.json {
                layer().json().with_writer(non_blocking).boxed()
            } else {
                layer().event_format(BracketFormat).with_writer(non_blocking).with_ansi(false).boxed()
            };

            layers.push(boxed);
            (Some(g), Some(path))
        } else {
            (None, None)
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        let subscriber = tracing_subscriber::registry().with(env_filter).with(layers);

        Ok(Logger {
            dispatch: Dispatch::new(subscriber),
            guard,
            log_dir,
            file_name: self.config.file_name,
        })
    }

    /// Builds the logger and installs it as the process-wide default.
    ///
    /// # Errors
    /// Everything [`LoggerBuilder::build`] can return, plus [`LoggerError::Subscriber`]
    /// if a global default has already been installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let logger = self.build()?;
        logger.install()?;
        Ok(logger)
    }
}

/// A handle to a constructed logging pipeline.
///
/// It holds the subscriber and the background worker guard of the file writer.
/// Dropping it flushes pending file output and stops the worker.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    dispatch: Dispatch,
    guard: Option<WorkerGuard>,
    log_dir: Option<PathBuf>,
    file_name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] with console output at `INFO` and no file output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cnn_logger::{LevelFilter, Logger};
    ///
    /// let logger = Logger::builder().level(LevelFilter::DEBUG).build().unwrap();
    /// logger.in_scope(|| tracing::debug!("visible"));
    /// ```
    #[must_use = "The builder must be configured before it can be used to build the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), file_state: std::marker::PhantomData }
    }

    /// Installs this logger as the process-wide default subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global default is already installed.
    pub fn install(&self) -> Result<(), LoggerError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .context("Global logger already installed")
    }

    /// Runs `f` with this logger as the current thread's default subscriber.
    pub fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Returns the underlying dispatcher, e.g. to hand it to another thread.
    #[must_use]
    pub const fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Returns a reference to the underlying worker guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }

    /// Returns the log directory, if file output is enabled.
    #[must_use]
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    /// Returns the configured log file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            self.in_scope(|| tracing::debug!("Logging system shutting down, flushing buffers..."));
        }
    }
}

fn validate_config(config: &LoggerConfig) -> Result<(), LoggerError> {
    let name = config.file_name.trim();
    if name.is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Log file name cannot be empty".into(),
            context: None,
        });
    }

    if Path::new(name).file_name().and_then(|n| n.to_str()) != Some(name) {
        return Err(LoggerError::InvalidConfiguration {
            message: format!("Log file name '{name}' must not contain a directory").into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

/// Splits `running_logs.log` into the appender's prefix and suffix.
fn split_file_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    }
}
