//! Leaf parsers: runtime kind checks and exact-literal matching.
//!
//! Each function here is itself a [`Parser`](crate::Parser) and can be handed
//! straight to a combinator, e.g. `array_of(is_string)`. On a mismatch the
//! failure's `value` is the leaf that was inspected.

use crate::parser::Parser;
use crate::result::{failure, success, ParseResult};
use crate::utils::format_number;
use crate::value::{IntoValue, Map, Value};
use std::fmt::{self, Display};

pub(crate) fn type_mismatch<O>(input: &Value) -> ParseResult<O> {
    failure(input.clone(), format!("typeof value is {}", input.type_name()))
}

pub(crate) fn not_an_array<O>(input: &Value) -> ParseResult<O> {
    failure(input.clone(), "value is not Array.isArray")
}

pub fn is_string(input: &Value) -> ParseResult<String> {
    match input {
        Value::String(s) => success(s.clone()),
        _ => type_mismatch(input),
    }
}

pub fn is_number(input: &Value) -> ParseResult<f64> {
    match input {
        Value::Number(n) => success(*n),
        _ => type_mismatch(input),
    }
}

pub fn is_boolean(input: &Value) -> ParseResult<bool> {
    match input {
        Value::Boolean(b) => success(*b),
        _ => type_mismatch(input),
    }
}

pub fn is_undefined(input: &Value) -> ParseResult<()> {
    match input {
        Value::Undefined => success(()),
        _ => type_mismatch(input),
    }
}

/// Accepts anything, echoing the input. Use for opaque fields.
pub fn is_any_value(input: &Value) -> ParseResult<Value> {
    success(input.clone())
}

/// Accepts a non-null, non-array mapping.
pub fn is_object(input: &Value) -> ParseResult<Map> {
    match input {
        Value::Object(map) => success(map.clone()),
        _ => type_mismatch(input),
    }
}

pub fn is_array(input: &Value) -> ParseResult<Vec<Value>> {
    match input {
        Value::Array(items) => success(items.clone()),
        _ => not_an_array(input),
    }
}

/// A constant that [`is_exactly`] compares against.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Literal {
    /// Strict equality: same kind and same value. `NaN` matches nothing.
    fn matches(&self, input: &Value) -> bool {
        match (self, input) {
            (Literal::String(expected), Value::String(actual)) => expected == actual,
            (Literal::Number(expected), Value::Number(actual)) => expected == actual,
            (Literal::Boolean(expected), Value::Boolean(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{s}"),
            Literal::Number(n) => write!(f, "{}", format_number(*n)),
            Literal::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(f64::from(n))
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl IntoValue for Literal {
    fn into_value(self) -> Value {
        match self {
            Literal::String(s) => Value::String(s),
            Literal::Number(n) => Value::Number(n),
            Literal::Boolean(b) => Value::Boolean(b),
        }
    }
}

/// Parser returned by [`is_exactly`].
#[derive(Debug, Clone)]
pub struct Exactly {
    literal: Literal,
}

impl Parser for Exactly {
    type Output = Literal;

    fn parse(&self, input: &Value) -> ParseResult<Literal> {
        if self.literal.matches(input) {
            success(self.literal.clone())
        } else {
            failure(input.clone(), format!("is not {}", self.literal))
        }
    }
}

/// Accepts only a value strictly equal to `literal`.
pub fn is_exactly(literal: impl Into<Literal>) -> Exactly {
    Exactly {
        literal: literal.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_kinds() -> Vec<Value> {
        vec![
            Value::Undefined,
            Value::Null,
            Value::from(true),
            Value::from(1.5),
            Value::from("s"),
            Value::from(json!([1])),
            Value::from(json!({ "a": 1 })),
        ]
    }

    #[test]
    fn test_kind_checks_accept_only_their_kind() {
        for value in all_kinds() {
            let kind = value.type_name();
            assert_eq!(is_string(&value).is_success(), kind == "string");
            assert_eq!(is_number(&value).is_success(), kind == "number");
            assert_eq!(is_boolean(&value).is_success(), kind == "boolean");
            assert_eq!(is_undefined(&value).is_success(), kind == "undefined");
        }
    }

    #[test]
    fn test_type_mismatch_reason_names_null() {
        assert_eq!(
            is_string(&Value::Null),
            failure(Value::Null, "typeof value is null")
        );
        assert_eq!(
            is_number(&Value::from("1")),
            failure(Value::from("1"), "typeof value is string")
        );
        assert_eq!(
            is_boolean(&Value::Undefined),
            failure(Value::Undefined, "typeof value is undefined")
        );
    }

    #[test]
    fn test_is_any_value_echoes() {
        for value in all_kinds() {
            assert_eq!(is_any_value(&value), success(value.clone()));
        }
    }

    #[test]
    fn test_is_object_rejects_null_and_arrays() {
        assert_eq!(
            is_object(&Value::Null),
            failure(Value::Null, "typeof value is null")
        );
        let array = Value::from(json!([]));
        assert_eq!(
            is_object(&array),
            failure(array.clone(), "typeof value is object")
        );
        assert!(is_object(&Value::from(json!({}))).is_success());
    }

    #[test]
    fn test_is_array_reason() {
        assert_eq!(
            is_array(&Value::from(json!({ "0": 1 }))),
            failure(Value::from(json!({ "0": 1 })), "value is not Array.isArray")
        );
        assert_eq!(
            is_array(&Value::from(json!([1, "a"]))),
            success(vec![Value::from(1), Value::from("a")])
        );
    }

    #[test]
    fn test_is_exactly_is_strict() {
        assert_eq!(is_exactly("on").parse(&Value::from("on")), success(Literal::from("on")));
        assert_eq!(
            is_exactly(1).parse(&Value::from("1")),
            failure(Value::from("1"), "is not 1")
        );
        assert_eq!(
            is_exactly(true).parse(&Value::from(1)),
            failure(Value::from(1), "is not true")
        );
        assert_eq!(
            is_exactly("v2").parse(&Value::Null),
            failure(Value::Null, "is not v2")
        );
        assert!(is_exactly(f64::NAN).parse(&Value::Number(f64::NAN)).is_failure());
    }
}
