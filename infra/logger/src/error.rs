use cnn_error::format_context;
use std::borrow::Cow;
use tracing::dispatcher::SetGlobalDefaultError;
use tracing_appender::rolling::InitError;

/// Errors that can occur while building or installing a [`crate::Logger`].
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the file appender (e.g., unwritable directory).
    #[error("Log file appender error{}: {source}", format_context(.context))]
    Appender { source: InitError, context: Option<Cow<'static, str>> },

    /// Occurs if a global default subscriber has already been installed in the current process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber { source: SetGlobalDefaultError, context: Option<Cow<'static, str>> },

    /// Internal logic errors.
    #[error("Internal logger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

cnn_error::error_context! {
    /// Adds `.context(..)` to logger results and to results of the wrapped source errors.
    pub trait LoggerErrorExt for LoggerError {
        variants: [Appender, Subscriber, Internal, InvalidConfiguration],
        sources: [Appender(InitError), Subscriber(SetGlobalDefaultError)],
    }
}
