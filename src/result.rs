//! The outcome of running a parser.
//!
//! A [`ParseResult`] is either a `Success` holding the validated output, or a
//! `Failure` holding the offending input together with a displayable reason.
//! Neither shape is an error in the Rust sense: a failure is the ordinary,
//! expected answer for invalid input, and combinators pass it around by value.

use crate::value::Value;
use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

/// Why a value was rejected, and a snapshot of the value itself.
///
/// For primitive parsers `value` is the failing leaf. Structural combinators
/// replace it with the whole input they were handed, so the broadest
/// enclosing value is what callers see.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{reason}")]
pub struct Failure<I: Debug = Value> {
    pub value: I,
    pub reason: String,
}

impl<I: Debug> Failure<I> {
    pub fn new(value: I, reason: impl Into<String>) -> Self {
        Failure {
            value,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<O, I: Debug = Value> {
    Success(O),
    Failure(Failure<I>),
}

/// Wraps `value` unchanged in a `Success`.
pub fn success<O, I: Debug>(value: O) -> ParseResult<O, I> {
    ParseResult::Success(value)
}

/// Builds a `Failure` from the literal `value` and `reason` given.
pub fn failure<O, I: Debug>(value: I, reason: impl Into<String>) -> ParseResult<O, I> {
    ParseResult::Failure(Failure::new(value, reason))
}

impl<O, I: Debug> ParseResult<O, I> {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure(_))
    }

    /// Chains `f` onto a success. A failure passes through untouched.
    pub fn map_success<O2, F>(self, f: F) -> ParseResult<O2, I>
    where
        F: FnOnce(O) -> ParseResult<O2, I>,
    {
        match self {
            ParseResult::Success(value) => f(value),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    /// Chains `f` onto a failure. A success passes through untouched.
    pub fn map_failure<I2: Debug, F>(self, f: F) -> ParseResult<O, I2>
    where
        F: FnOnce(Failure<I>) -> ParseResult<O, I2>,
    {
        match self {
            ParseResult::Success(value) => ParseResult::Success(value),
            ParseResult::Failure(failure) => f(failure),
        }
    }

    /// Folds the result into a single value; exactly one of the two
    /// functions is called.
    pub fn map_result<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(O) -> T,
        F: FnOnce(Failure<I>) -> T,
    {
        match self {
            ParseResult::Success(value) => on_success(value),
            ParseResult::Failure(failure) => on_failure(failure),
        }
    }

    pub fn success_value(&self) -> Option<&O> {
        match self {
            ParseResult::Success(value) => Some(value),
            ParseResult::Failure(_) => None,
        }
    }

    pub fn failure_ref(&self) -> Option<&Failure<I>> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure(failure) => Some(failure),
        }
    }

    /// Converts into a standard `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<O, Failure<I>> {
        self.into()
    }
}

impl<O, I: Debug> From<ParseResult<O, I>> for Result<O, Failure<I>> {
    fn from(result: ParseResult<O, I>) -> Self {
        match result {
            ParseResult::Success(value) => Ok(value),
            ParseResult::Failure(failure) => Err(failure),
        }
    }
}

impl<O, I: Debug> From<Result<O, Failure<I>>> for ParseResult<O, I> {
    fn from(result: Result<O, Failure<I>>) -> Self {
        match result {
            Ok(value) => ParseResult::Success(value),
            Err(failure) => ParseResult::Failure(failure),
        }
    }
}
