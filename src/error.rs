use crate::result::Failure;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::fmt::{self, Display};
use thiserror::Error;

/// The text format a body was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

/// Why a body was rejected at the boundary.
///
/// Parsers themselves never produce this: it wraps either a decoding error
/// that happened before any parser ran, or the `Failure` a parser returned.
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CheckError {
    #[error("Malformed {format}: {message}")]
    #[diagnostic(
        code(vouch::decode),
        help("The body could not be decoded, so no validation was attempted.")
    )]
    Decode {
        format: Format,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },

    #[error("Validation failed: {}", .failure.reason)]
    #[diagnostic(
        code(vouch::validation),
        help("The decoded value does not have the expected shape.")
    )]
    Validation {
        #[source]
        failure: Failure,
    },
}

impl CheckError {
    /// The parser failure behind this error, if validation is what failed.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            CheckError::Validation { failure } => Some(failure),
            CheckError::Decode { .. } => None,
        }
    }
}

impl From<Failure> for CheckError {
    fn from(failure: Failure) -> Self {
        CheckError::Validation { failure }
    }
}
