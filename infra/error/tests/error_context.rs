use cnn_error::format_context;
use std::borrow::Cow;
use std::num::ParseIntError;
use std::{fmt, io};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact I/O failure{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    #[error("Bad epoch number{}: {source}", format_context(.context))]
    Epoch { source: ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Artifact missing{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

cnn_error::error_context! {
    /// Adds `.context(..)` to artifact results.
    pub trait ArtifactErrorExt for ArtifactError {
        variants: [Io, Epoch, Missing],
        sources: [Io(io::Error), Epoch(ParseIntError)],
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SingleError {
    #[error("Format failure{}: {source}", format_context(.context))]
    Format { source: fmt::Error, context: Option<Cow<'static, str>> },
}

cnn_error::error_context! {
    trait SingleErrorExt for SingleError {
        variants: [Format],
        sources: [Format(fmt::Error)]
    }
}

fn epoch(text: &str) -> Result<u32, ArtifactError> {
    Ok(text.parse::<u32>()?)
}

#[test]
fn question_mark_lifts_sources_without_context() {
    let err = epoch("ten").unwrap_err();
    assert!(matches!(err, ArtifactError::Epoch { context: None, .. }));
    assert_eq!(err.to_string(), "Bad epoch number: invalid digit found in string");
}

#[test]
fn context_on_a_source_result_picks_its_variant() {
    let read: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let err = read.context("Reading model.h5").unwrap_err();

    assert!(matches!(err, ArtifactError::Io { .. }));
    assert_eq!(err.to_string(), "Artifact I/O failure (Reading model.h5): gone");
}

#[test]
fn context_replaces_the_existing_context() {
    let missing: Result<(), ArtifactError> = Err(ArtifactError::Missing {
        message: "scores.json".into(),
        context: Some("first".into()),
    });
    let err = missing.context(String::from("evaluation")).unwrap_err();

    assert_eq!(err.to_string(), "Artifact missing (evaluation): scores.json");
}

#[test]
fn single_variant_enums_are_supported() {
    let err = Err::<(), _>(fmt::Error).context("render").unwrap_err();
    assert!(matches!(err, SingleError::Format { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Format failure (render): "));
}
