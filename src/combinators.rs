//! Wrappers around a single parser: absence handling and post-validation
//! transforms.

use crate::parser::Parser;
use crate::result::{failure, success, Failure, ParseResult};
use crate::value::{IntoValue, Value};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Parser returned by [`optional`].
#[derive(Debug, Clone)]
pub struct Optional<P> {
    inner: P,
}

impl<P> Optional<P> {
    pub fn new(inner: P) -> Self {
        Optional { inner }
    }
}

impl<P: Parser> Parser for Optional<P> {
    type Output = Option<P::Output>;

    fn parse(&self, input: &Value) -> ParseResult<Self::Output> {
        if input.is_null() {
            return success(None);
        }
        self.inner.parse(input).map_success(|out| success(Some(out)))
    }
}

/// Accepts an explicit `null` without consulting `parser`; anything else,
/// including an absent value, goes to `parser`.
pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

/// Parser returned by [`voidable`].
#[derive(Debug, Clone)]
pub struct Voidable<P> {
    inner: P,
}

impl<P> Voidable<P> {
    pub fn new(inner: P) -> Self {
        Voidable { inner }
    }
}

impl<P: Parser> Parser for Voidable<P> {
    type Output = Option<P::Output>;

    fn parse(&self, input: &Value) -> ParseResult<Self::Output> {
        if input.is_undefined() {
            return success(None);
        }
        self.inner.parse(input).map_success(|out| success(Some(out)))
    }
}

/// Accepts an absent value without consulting `parser`; anything else,
/// including `null`, goes to `parser`.
pub fn voidable<P: Parser>(parser: P) -> Voidable<P> {
    Voidable::new(parser)
}

/// Parser returned by [`map_parser`].
#[derive(Clone)]
pub struct MapParser<P, F> {
    parser: P,
    next: F,
}

impl<P, F> MapParser<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        MapParser { parser, next }
    }
}

impl<P, F, O2, I> Parser for MapParser<P, F>
where
    P: Parser,
    I: Debug,
    F: Fn(P::Output) -> ParseResult<O2, I>,
{
    type Output = O2;

    fn parse(&self, input: &Value) -> ParseResult<O2> {
        self.parser.parse(input).map_success(|validated| {
            // Failures from `next` report the input the caller handed in,
            // never the intermediate validated value.
            (self.next)(validated).map_failure(|failed| {
                ParseResult::Failure(Failure::new(input.clone(), failed.reason))
            })
        })
    }
}

/// Runs `parser`, then feeds its output to `next`, which may reject it for
/// its own reasons (range checks, business rules, conversions).
///
/// A failure from `next` keeps its reason but has its value replaced by the
/// original input given to the composed parser.
pub fn map_parser<P, F, O2, I>(parser: P, next: F) -> MapParser<P, F>
where
    P: Parser,
    I: Debug,
    F: Fn(P::Output) -> ParseResult<O2, I>,
{
    MapParser::new(parser, next)
}

/// Parser returned by [`typed`].
pub struct Typed<P, T> {
    parser: P,
    target: PhantomData<fn() -> T>,
}

impl<P, T> Typed<P, T> {
    pub fn new(parser: P) -> Self {
        Typed {
            parser,
            target: PhantomData,
        }
    }
}

impl<P, T> Parser for Typed<P, T>
where
    P: Parser,
    P::Output: IntoValue,
    T: DeserializeOwned,
{
    type Output = T;

    fn parse(&self, input: &Value) -> ParseResult<T> {
        self.parser.parse(input).map_success(|validated| {
            let converted = serde_json::to_value(validated.into_value())
                .and_then(serde_json::from_value::<T>);
            match converted {
                Ok(typed) => success(typed),
                Err(err) => failure(input.clone(), err.to_string()),
            }
        })
    }
}

/// Runs `parser`, then deserializes its validated output into `T`.
///
/// This is the hand-off from dynamic data to a statically-shaped type. A
/// deserialization failure reports serde's message against the original
/// input, the same way [`map_parser`] does.
pub fn typed<T, P>(parser: P) -> Typed<P, T>
where
    P: Parser,
    P::Output: IntoValue,
    T: DeserializeOwned,
{
    Typed::new(parser)
}
