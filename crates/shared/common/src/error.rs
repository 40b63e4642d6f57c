use cnn_error::format_context;
use std::borrow::Cow;

/// A specialized [`CommonError`] enum for the file I/O utilities.
///
/// Nothing in this crate recovers locally: every variant reaches the immediate caller.
#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    /// The YAML document is empty, comment-only or `null`.
    #[error("YAML file is empty{}: {message}", format_context(.context))]
    EmptyConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Untyped input (parsed YAML/JSON, values handed to `save_json`) breaks its contract.
    #[error("Type contract violation{}: {message}", format_context(.context))]
    TypeContract { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A required key is absent from a configuration document.
    #[error("Missing configuration key{}: {message}", format_context(.context))]
    MissingKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("YAML parse failure{}: {source}", format_context(.context))]
    Yaml { source: serde_yaml::Error, context: Option<Cow<'static, str>> },

    #[error("JSON failure{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Binary serialization failure{}: {source}", format_context(.context))]
    Binary { source: postcard::Error, context: Option<Cow<'static, str>> },

    #[error("Base64 decode failure{}: {source}", format_context(.context))]
    Base64 { source: base64::DecodeError, context: Option<Cow<'static, str>> },
}

cnn_error::error_context! {
    /// Adds `.context(..)` to results carrying a [`CommonError`] or one of its sources.
    pub trait CommonErrorExt for CommonError {
        variants: [EmptyConfig, TypeContract, MissingKey, Io, Yaml, Json, Binary, Base64],
        sources: [
            Io(std::io::Error),
            Yaml(serde_yaml::Error),
            Json(serde_json::Error),
            Binary(postcard::Error),
            Base64(base64::DecodeError),
        ],
    }
}

impl CommonError {
    pub(crate) fn type_contract(message: impl Into<Cow<'static, str>>) -> Self {
        Self::TypeContract { message: message.into(), context: None }
    }
}
