//! Decode-then-validate entry points for request and response bodies.
//!
//! This is where untrusted text meets the parser algebra: the body is decoded
//! into a [`Value`] (the only step that can fail for reasons other than
//! shape), then a composed parser decides whether the value is acceptable.
//! Every rejection comes back as a [`CheckError`] that renders as a `miette`
//! diagnostic.

use crate::error::{CheckError, Format};
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::utils::{floor_char_boundary, offset_of_line_and_column};
use crate::value::Value;
use miette::NamedSource;

/// Decodes a JSON document into a [`Value`].
///
/// `name` labels the source in diagnostics, e.g. a file name or
/// `"POST /users body"`.
///
/// # Errors
///
/// Returns [`CheckError::Decode`] pointing at the offending position when the
/// text is not valid JSON.
pub fn decode_json(source: &str, name: &str) -> Result<Value, CheckError> {
    match serde_json::from_str::<serde_json::Value>(source) {
        Ok(json) => Ok(Value::from(json)),
        Err(err) => {
            let offset = offset_of_line_and_column(source, err.line(), err.column());
            log::debug!("{name}: malformed JSON at byte {offset}: {err}");
            Err(decode_error(Format::Json, source, name, offset, err.to_string()))
        }
    }
}

/// Decodes a YAML document into a [`Value`].
///
/// # Errors
///
/// Returns [`CheckError::Decode`] when the text is not valid YAML.
pub fn decode_yaml(source: &str, name: &str) -> Result<Value, CheckError> {
    match serde_yaml::from_str::<serde_yaml::Value>(source) {
        Ok(yaml) => Ok(Value::from(yaml)),
        Err(err) => {
            let offset = err
                .location()
                .map_or(source.len(), |location| location.index());
            log::debug!("{name}: malformed YAML at byte {offset}: {err}");
            Err(decode_error(Format::Yaml, source, name, offset, err.to_string()))
        }
    }
}

fn decode_error(
    format: Format,
    source: &str,
    name: &str,
    offset: usize,
    message: String,
) -> CheckError {
    let offset = floor_char_boundary(source, offset);
    // Point at one character, or at the end for truncated input.
    let len = source[offset..].chars().next().map_or(0, char::len_utf8);
    CheckError::Decode {
        format,
        message,
        src: NamedSource::new(name, source.to_string()),
        span: (offset, len).into(),
    }
}

/// Runs `parser` against an already-decoded value.
///
/// # Errors
///
/// Returns [`CheckError::Validation`] carrying the parser's failure.
pub fn check<P: Parser>(parser: &P, value: &Value) -> Result<P::Output, CheckError> {
    match parser.parse(value) {
        ParseResult::Success(out) => {
            log::trace!("value accepted");
            Ok(out)
        }
        ParseResult::Failure(failure) => {
            log::trace!("value rejected: {}", failure.reason);
            Err(failure.into())
        }
    }
}

/// Decodes `source` as JSON and runs `parser` against the result.
///
/// # Errors
///
/// Returns [`CheckError::Decode`] for malformed text and
/// [`CheckError::Validation`] when the decoded value is rejected.
pub fn check_json<P: Parser>(
    parser: &P,
    source: &str,
    name: &str,
) -> Result<P::Output, CheckError> {
    let value = decode_json(source, name)?;
    check(parser, &value)
}

/// Decodes `source` as YAML and runs `parser` against the result.
///
/// # Errors
///
/// Returns [`CheckError::Decode`] for malformed text and
/// [`CheckError::Validation`] when the decoded value is rejected.
pub fn check_yaml<P: Parser>(
    parser: &P,
    source: &str,
    name: &str,
) -> Result<P::Output, CheckError> {
    let value = decode_yaml(source, name)?;
    check(parser, &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_of;
    use crate::primitives::{is_number, is_string};
    use crate::structural::array_of;

    #[test]
    fn test_check_json_success() {
        let user = object_of! { "name" => is_string, "age" => is_number };
        let record = check_json(&user, r#"{ "name": "Ada", "age": 36 }"#, "body.json").unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("Ada")));
    }

    #[test]
    fn test_check_json_validation_error() {
        let user = object_of! { "name" => is_string };
        let err = check_json(&user, r#"{ "name": 1 }"#, "body.json").unwrap_err();
        let failure = err.failure().unwrap();
        assert_eq!(failure.reason, "Failed at 'name': typeof value is number");
        assert_eq!(
            err.to_string(),
            "Validation failed: Failed at 'name': typeof value is number"
        );
    }

    #[test]
    fn test_decode_json_error_points_into_source() {
        let source = "{\n  \"a\": ,\n}";
        let err = decode_json(source, "broken.json").unwrap_err();
        match err {
            CheckError::Decode { format, span, .. } => {
                assert_eq!(format, Format::Json);
                assert_eq!(&source[span.offset()..span.offset() + span.len()], ",");
            }
            CheckError::Validation { .. } => panic!("Expected a decode error"),
        }
    }

    #[test]
    fn test_decode_json_truncated_input() {
        let err = decode_json("[1, 2", "short.json").unwrap_err();
        assert!(err.failure().is_none());
        assert!(err.to_string().starts_with("Malformed JSON"));
    }

    #[test]
    fn test_check_yaml() {
        let ports = array_of(is_number);
        assert_eq!(
            check_yaml(&ports, "- 80\n- 443\n", "ports.yaml").unwrap(),
            vec![80.0, 443.0]
        );

        let err = check_yaml(&ports, "- 80\n- http\n", "ports.yaml").unwrap_err();
        assert_eq!(
            err.failure().unwrap().reason,
            "Failed at '1': typeof value is string"
        );
    }

    #[test]
    fn test_decode_yaml_error() {
        let err = decode_yaml("key: [unclosed", "bad.yaml").unwrap_err();
        assert!(matches!(err, CheckError::Decode { format: Format::Yaml, .. }));
    }
}
