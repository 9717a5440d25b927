//! Combinators over containers: fixed-shape records, keyed maps, sequences,
//! and ordered alternatives.
//!
//! All of them stop at the first failing child. The child's reason is
//! prefixed with the key or index that led to it (see [`failed_at`]) and the
//! failure's value becomes the whole container that was being validated, so
//! nested failures read like a path: `Failed at 'a': Failed at 'b': …`.

use crate::parser::{BoxedParser, Parser, ParserExt};
use crate::primitives::{not_an_array, type_mismatch};
use crate::result::{failure, success, ParseResult};
use crate::value::{IntoValue, Map, Value};
use std::collections::BTreeMap;

/// Prefixes `reason` with the key or index it was found under, reporting
/// `whole` as the failing value.
pub fn failed_at<O>(key: &str, reason: &str, whole: &Value) -> ParseResult<O> {
    failure(whole.clone(), format!("Failed at '{key}': {reason}"))
}

/// Parser returned by [`object_of`] and the [`object_of!`](crate::object_of!)
/// macro.
///
/// Fields are checked in the order they were declared. The output is a fresh
/// record holding each field's validated output; a field whose property was
/// absent and whose output is empty (as with [`voidable`](crate::voidable))
/// is left out of the record rather than stored as `null`.
#[derive(Default)]
pub struct ObjectOf {
    fields: Vec<(String, BoxedParser<Value>)>,
}

impl ObjectOf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the next field.
    pub fn field<P>(mut self, name: impl Into<String>, parser: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
        P::Output: IntoValue,
    {
        self.fields.push((name.into(), parser.erased()));
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Parser for ObjectOf {
    type Output = Map;

    fn parse(&self, input: &Value) -> ParseResult<Map> {
        if !matches!(input, Value::Object(_)) {
            return type_mismatch(input);
        }

        let mut record = Map::new();
        for (name, parser) in &self.fields {
            let property = input.get(name);
            match parser.parse(property) {
                ParseResult::Success(out) => {
                    let empty = out.is_undefined() || (property.is_undefined() && out.is_null());
                    if !empty {
                        record.insert(name.clone(), out);
                    }
                }
                ParseResult::Failure(inner) => return failed_at(name, &inner.reason, input),
            }
        }
        success(record)
    }
}

/// Builds a fixed-shape record parser from `(field name, parser)` pairs.
///
/// The [`object_of!`](crate::object_of!) macro is usually more convenient,
/// since it erases each field parser for you.
pub fn object_of<K, I>(fields: I) -> ObjectOf
where
    K: Into<String>,
    I: IntoIterator<Item = (K, BoxedParser<Value>)>,
{
    ObjectOf {
        fields: fields
            .into_iter()
            .map(|(name, parser)| (name.into(), parser))
            .collect(),
    }
}

/// Parser returned by [`indexed_object_of`].
#[derive(Debug, Clone)]
pub struct IndexedObjectOf<P> {
    element: P,
}

impl<P: Parser> Parser for IndexedObjectOf<P> {
    type Output = BTreeMap<String, P::Output>;

    fn parse(&self, input: &Value) -> ParseResult<Self::Output> {
        let object = match input {
            Value::Object(object) => object,
            _ if input.is_nullish() => {
                return failure(input.clone(), "value is null or undefined");
            }
            _ => return type_mismatch(input),
        };

        let mut out = BTreeMap::new();
        for (key, value) in object {
            match self.element.parse(value) {
                ParseResult::Success(validated) => {
                    out.insert(key.clone(), validated);
                }
                ParseResult::Failure(inner) => return failed_at(key, &inner.reason, input),
            }
        }
        success(out)
    }
}

/// Validates a mapping with arbitrary keys whose values all satisfy `element`.
pub fn indexed_object_of<P: Parser>(element: P) -> IndexedObjectOf<P> {
    IndexedObjectOf { element }
}

/// Parser returned by [`array_of`].
#[derive(Debug, Clone)]
pub struct ArrayOf<P> {
    element: P,
}

impl<P: Parser> Parser for ArrayOf<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: &Value) -> ParseResult<Self::Output> {
        let items = match input {
            Value::Array(items) => items,
            _ => return not_an_array(input),
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.element.parse(item) {
                ParseResult::Success(validated) => out.push(validated),
                ParseResult::Failure(inner) => {
                    return failed_at(&index.to_string(), &inner.reason, input);
                }
            }
        }
        success(out)
    }
}

/// Validates a sequence whose elements all satisfy `element`, left to right.
pub fn array_of<P: Parser>(element: P) -> ArrayOf<P> {
    ArrayOf { element }
}

/// Parser returned by [`one_of`] and the [`one_of!`](crate::one_of!) macro.
pub struct OneOf<O> {
    alternatives: Vec<BoxedParser<O>>,
}

impl<O> OneOf<O> {
    pub fn new(alternatives: Vec<BoxedParser<O>>) -> Self {
        OneOf { alternatives }
    }

    /// Appends an alternative, tried after every existing one.
    pub fn or<P>(mut self, parser: P) -> Self
    where
        P: Parser<Output = O> + Send + Sync + 'static,
    {
        self.alternatives.push(parser.boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<O> Parser for OneOf<O> {
    type Output = O;

    fn parse(&self, input: &Value) -> ParseResult<O> {
        for alternative in &self.alternatives {
            if let ParseResult::Success(out) = alternative.parse(input) {
                return success(out);
            }
        }
        failure(
            input.clone(),
            format!(
                "'{input}' did not match any of {} validators",
                self.alternatives.len()
            ),
        )
    }
}

/// Tries each alternative in order and keeps the first success.
///
/// When every alternative fails their reasons are dropped in favour of one
/// aggregate reason. Order matters where alternatives overlap: put the most
/// specific first. With no alternatives at all every input fails.
pub fn one_of<O>(alternatives: Vec<BoxedParser<O>>) -> OneOf<O> {
    OneOf::new(alternatives)
}

/// Builds an [`ObjectOf`] from `name => parser` pairs, in declaration order.
///
/// ```
/// use vouch_core::{is_number, is_string, object_of, Parser, Value};
///
/// let point = object_of! { "label" => is_string, "x" => is_number };
/// let input = Value::from(serde_json::json!({ "label": "origin", "x": 0 }));
/// assert!(point.parse(&input).is_success());
/// ```
#[macro_export]
macro_rules! object_of {
    ($($name:expr => $parser:expr),* $(,)?) => {
        $crate::ObjectOf::new()$(.field($name, $parser))*
    };
}

/// Builds a [`OneOf`] over parsers of any output type; outputs are converted
/// to [`Value`].
///
/// ```
/// use vouch_core::{is_boolean, is_number, one_of, Parser, Value};
///
/// let flag = one_of![is_number, is_boolean];
/// assert!(flag.parse(&Value::from(true)).is_success());
/// assert_eq!(
///     flag.parse(&Value::Null).failure_ref().map(|f| f.reason.as_str()),
///     Some("'null' did not match any of 2 validators")
/// );
/// ```
#[macro_export]
macro_rules! one_of {
    ($($parser:expr),+ $(,)?) => {
        $crate::OneOf::new(vec![$($crate::ParserExt::erased($parser)),+])
    };
}
