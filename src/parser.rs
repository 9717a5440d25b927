//! The parser contract.
//!
//! A [`Parser`] is a pure, total function from a dynamic [`Value`] to a
//! [`ParseResult`]. Parsers hold no per-call state, so one composed parser can
//! be built once and run against any number of inputs, from any number of
//! threads.

use crate::combinators::{MapParser, Optional, Typed, Voidable};
use crate::result::ParseResult;
use crate::value::{IntoValue, Value};

pub trait Parser {
    /// The validated, typed output.
    type Output;

    /// Classifies `input`, producing either the validated output or a failure.
    fn parse(&self, input: &Value) -> ParseResult<Self::Output>;
}

/// A type-erased parser, used wherever parsers of different concrete types
/// have to sit side by side (record fields, alternatives).
pub type BoxedParser<O> = Box<dyn Parser<Output = O> + Send + Sync>;

impl<F, O> Parser for F
where
    F: Fn(&Value) -> ParseResult<O>,
{
    type Output = O;

    fn parse(&self, input: &Value) -> ParseResult<O> {
        self(input)
    }
}

impl<O> Parser for Box<dyn Parser<Output = O> + Send + Sync> {
    type Output = O;

    fn parse(&self, input: &Value) -> ParseResult<O> {
        (**self).parse(input)
    }
}

/// Method-call sugar for the combinators.
pub trait ParserExt: Parser + Sized {
    /// Erases the concrete parser type.
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Same as [`optional`](crate::optional).
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Same as [`voidable`](crate::voidable).
    fn voidable(self) -> Voidable<Self> {
        Voidable::new(self)
    }

    /// Same as [`map_parser`](crate::map_parser).
    fn and_then<O2, I, F>(self, next: F) -> MapParser<Self, F>
    where
        I: std::fmt::Debug,
        F: Fn(Self::Output) -> ParseResult<O2, I>,
    {
        MapParser::new(self, next)
    }

    /// Same as [`typed`](crate::typed).
    fn typed<T>(self) -> Typed<Self, T>
    where
        Self::Output: IntoValue,
        T: serde::de::DeserializeOwned,
    {
        Typed::new(self)
    }

    /// Converts the typed output back into a [`Value`] and erases the parser.
    fn erased(self) -> BoxedParser<Value>
    where
        Self: Send + Sync + 'static,
        Self::Output: IntoValue,
    {
        Box::new(move |input: &Value| {
            self.parse(input)
                .map_success(|out| ParseResult::Success(out.into_value()))
        })
    }
}

impl<P: Parser> ParserExt for P {}
