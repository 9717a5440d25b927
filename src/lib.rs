//! `vouch-core` validates untrusted, dynamically-shaped data (decoded JSON or
//! YAML bodies, config blobs, API responses) and turns it into typed values,
//! or explains precisely where and why it does not fit.
//!
//! A [`Parser`] takes a [`Value`] and returns a [`ParseResult`]: either the
//! validated output or a [`Failure`] with the offending value and a reason.
//! Primitive parsers check a single kind; combinators nest them into records,
//! maps, sequences and alternatives, prefixing reasons with the path that led
//! to the problem.
//!
//! ```
//! use vouch_core::{array_of, is_number, is_string, object_of, optional, Parser, Value};
//! use serde_json::json;
//!
//! let user = object_of! {
//!     "name" => is_string,
//!     "email" => optional(is_string),
//!     "scores" => array_of(is_number),
//! };
//!
//! let ok = Value::from(json!({ "name": "Ada", "email": null, "scores": [1, 2] }));
//! assert!(user.parse(&ok).is_success());
//!
//! let bad = Value::from(json!({ "name": "Ada", "email": null, "scores": [1, "2"] }));
//! let failure = user.parse(&bad).into_result().unwrap_err();
//! assert_eq!(failure.reason, "Failed at 'scores': Failed at '1': typeof value is string");
//! assert_eq!(failure.value, bad);
//! ```

pub mod api;
pub mod combinators;
pub mod error;
pub mod parser;
pub mod primitives;
pub mod result;
pub mod structural;
pub mod utils;
pub mod value;

pub use crate::api::{check, check_json, check_yaml, decode_json, decode_yaml};
pub use crate::combinators::{
    map_parser, optional, typed, voidable, MapParser, Optional, Typed, Voidable,
};
pub use crate::error::{CheckError, Format};
pub use crate::parser::{BoxedParser, Parser, ParserExt};
pub use crate::primitives::{
    is_any_value, is_array, is_boolean, is_exactly, is_number, is_object, is_string,
    is_undefined, Exactly, Literal,
};
pub use crate::result::{failure, success, Failure, ParseResult};
pub use crate::structural::{
    array_of, failed_at, indexed_object_of, object_of, one_of, ArrayOf, IndexedObjectOf,
    ObjectOf, OneOf,
};
pub use crate::value::{IntoValue, Map, Value};
