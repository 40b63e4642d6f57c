use crate::domain::settings::LoggingSettings;
use cnn_logger::{ConsoleStream, LevelFilter, Logger, LoggerBuilder, LoggerError};

/// Builds (without installing) a [`Logger`] from the `logging` section of the settings.
/// Console lines go to `console`; binaries that print results pass [`ConsoleStream::Stderr`].
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level, a bad filter or when
/// both console and file output are disabled; otherwise whatever [`LoggerBuilder::build`]
/// reports.
pub fn build_logger(
    settings: &LoggingSettings,
    console: ConsoleStream,
) -> Result<Logger, LoggerError> {
    let level = settings.level.parse::<LevelFilter>().map_err(|e| {
        LoggerError::InvalidConfiguration {
            message: format!("Unknown log level '{}': {e}", settings.level).into(),
            context: None,
        }
    })?;

    let builder = Logger::builder()
        .console(settings.console)
        .console_stream(console)
        .level(level);
    let builder = with_filter(builder, settings);

    match &settings.dir {
        Some(dir) => {
            let builder = builder.path(dir).file_name(settings.file_name.as_str());
            if settings.json { builder.json().build() } else { builder.build() }
        },
        None => builder.build(),
    }
}

fn with_filter(builder: LoggerBuilder, settings: &LoggingSettings) -> LoggerBuilder {
    match &settings.filter {
        Some(filter) => builder.env_filter(filter.as_str()),
        None => builder,
    }
}
