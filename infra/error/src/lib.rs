//! # Error
//!
//! Wiring shared by the workspace error enums.
//!
//! Every error enum in the workspace follows one shape: named fields, a
//! `context: Option<Cow<'static, str>>` field on each variant, and a `source` field on the
//! variants that wrap an upstream error. This crate provides the two pieces that shape needs:
//!
//! * [`format_context`] renders the optional context inside `#[error(..)]` messages.
//! * [`error_context!`] generates the companion `...Ext` trait with `.context(..)` and the
//!   `From` conversions that let `?` lift source errors.
//!
//! ## Usage
//! ```rust
//! use cnn_error::format_context;
//! use std::borrow::Cow;
//!
//! #[derive(Debug, thiserror::Error)]
//! pub enum StoreError {
//!     #[error("Store I/O failure{}: {source}", format_context(.context))]
//!     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
//!
//!     #[error("Store is corrupt{}: {message}", format_context(.context))]
//!     Corrupt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
//! }
//!
//! cnn_error::error_context! {
//!     /// Adds `.context(..)` to store results.
//!     pub trait StoreErrorExt for StoreError {
//!         variants: [Io, Corrupt],
//!         sources: [Io(std::io::Error)],
//!     }
//! }
//!
//! fn open() -> Result<Vec<u8>, StoreError> {
//!     Ok(std::fs::read("missing.bin").context("Opening store")?)
//! }
//!
//! let err = open().unwrap_err();
//! assert!(err.to_string().starts_with("Store I/O failure (Opening store): "));
//! ```

use std::borrow::Cow;

/// Renders an optional context as ` (<context>)`, or nothing when it is absent.
#[must_use]
#[allow(clippy::ref_option)]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Generates the `.context(..)` extension trait and source conversions for an error enum.
///
/// * `variants` lists every variant; each must have a `context` field.
/// * `sources` maps a variant to the upstream error its `source` field holds. For each entry
///   the macro emits `From<Source> for Error` and implements the trait for `Result<T, Source>`.
///
/// Calling `.context(..)` on a `Result<T, Error>` replaces the context of the variant it holds.
#[macro_export]
macro_rules! error_context {
    (
        $(#[$meta:meta])*
        $vis:vis trait $ext:ident for $error:ident {
            variants: [$($variant:ident),+ $(,)?],
            sources: [$($source_variant:ident($source:ty)),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis trait $ext<T> {
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, $error>;
        }

        impl<T> $ext<T> for ::core::result::Result<T, $error> {
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        $( $error::$variant { context: c, .. } )|+ => *c = Some(context.into()),
                    }
                    e
                })
            }
        }

        $(
            impl From<$source> for $error {
                fn from(source: $source) -> Self {
                    Self::$source_variant { source, context: None }
                }
            }

            impl<T> $ext<T> for ::core::result::Result<T, $source> {
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::core::result::Result<T, $error> {
                    self.map_err(|source| $error::$source_variant {
                        source,
                        context: Some(context.into()),
                    })
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_context_renders_nothing() {
        assert_eq!(format_context(&None), "");
    }

    #[test]
    fn context_is_wrapped_in_parentheses() {
        assert_eq!(format_context(&Some("params.yaml".into())), " (params.yaml)");
    }
}
