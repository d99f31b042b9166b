//! Integration tests for JSON text interchange.

use quoll_geometry::Rectangle;
use quoll_json::{FromValues, from_text, to_text, to_text_pretty, value_kind};
use serde::Serialize;
use serde::de::Error as _;
use serde_json::{Value, json};

// Encoding Tests

#[test]
fn test_rectangle_encodes_in_declaration_order() {
    let rect = Rectangle::new(10.0, 20.0);
    assert_eq!(to_text(&rect).unwrap(), r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_pretty_encoding_indents_members() {
    let rect = Rectangle::new(10.0, 20.0);
    let text = to_text_pretty(&rect).unwrap();
    assert_eq!(text, "{\n  \"width\": 10.0,\n  \"height\": 20.0\n}");
}

#[test]
fn test_encoding_preserves_insertion_order() {
    // Members come back in the order they were inserted, not sorted.
    let document = json!({"zeta": 1, "alpha": 2, "mid": 3});
    assert_eq!(
        to_text(&document).unwrap(),
        r#"{"zeta":1,"alpha":2,"mid":3}"#
    );
}

#[test]
fn test_unsized_values_encode() {
    assert_eq!(to_text("plain text").unwrap(), r#""plain text""#);
    let parts: &[u32] = &[1, 2, 3];
    assert_eq!(to_text(parts).unwrap(), "[1,2,3]");
}

// Decoding Tests

#[test]
fn test_rectangle_round_trips() {
    let rect = Rectangle::new(10.0, 20.0);
    let text = to_text(&rect).unwrap();
    let back: Rectangle = from_text(&text).unwrap();
    assert!((back.width - rect.width).abs() < f64::EPSILON);
    assert!((back.height - rect.height).abs() < f64::EPSILON);
    assert!((back.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_rectangle_from_array_document() {
    // Member names are dropped, so an array works as well as an object.
    let rect: Rectangle = from_text("[10, 20]").unwrap();
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_member_names_are_not_consulted() {
    // Document order is what counts; the names can be anything.
    let rect: Rectangle = from_text(r#"{"w":10.0,"h":20.0}"#).unwrap();
    assert!((rect.width - 10.0).abs() < f64::EPSILON);
    assert!((rect.height - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_integer_members_widen_to_f64() {
    let rect: Rectangle = from_text(r#"{"width":10,"height":20}"#).unwrap();
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

// Decoding Failure Tests

#[test]
fn test_wrong_member_count_reports_expected_arity() {
    let err = from_text::<Rectangle>(r#"{"width":10.0,"height":20.0,"depth":5.0}"#).unwrap_err();
    assert_eq!(err.to_string(), "expected 2 values for a rectangle, got 3");

    let err = from_text::<Rectangle>("{}").unwrap_err();
    assert_eq!(err.to_string(), "expected 2 values for a rectangle, got 0");
}

#[test]
fn test_non_numeric_member_names_the_field() {
    let err = from_text::<Rectangle>(r#"{"width":"wide","height":20.0}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected a number for rectangle width, got a string"
    );
    assert!(err.is_data());
}

#[test]
fn test_scalar_top_level_is_rejected() {
    let err = from_text::<Rectangle>("42").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected a JSON object or array at the top level, got a number"
    );

    let err = from_text::<Rectangle>("null").unwrap_err();
    assert!(err.to_string().contains("got null"));
}

#[test]
fn test_malformed_text_is_a_syntax_error() {
    // Unquoted member names are not JSON.
    let err = from_text::<Rectangle>("{width: 10, height: 20}").unwrap_err();
    assert!(err.is_syntax());

    let err = from_text::<Rectangle>("").unwrap_err();
    assert!(err.is_eof());
}

#[test]
fn test_value_kind_names() {
    assert_eq!(value_kind(&Value::Null), "null");
    assert_eq!(value_kind(&json!(true)), "a boolean");
    assert_eq!(value_kind(&json!(1.5)), "a number");
    assert_eq!(value_kind(&json!("s")), "a string");
    assert_eq!(value_kind(&json!([])), "an array");
    assert_eq!(value_kind(&json!({})), "an object");
}

// Caller-Defined Shapes

/// A shape owned by this test crate, to exercise the trait from outside.
#[derive(Debug, PartialEq, Serialize)]
struct Span {
    start: u64,
    len: u64,
}

impl FromValues for Span {
    fn from_values(values: Vec<Value>) -> serde_json::Result<Self> {
        let [start, len] = <[Value; 2]>::try_from(values).map_err(|values| {
            serde_json::Error::custom(format!("expected 2 values for a span, got {}", values.len()))
        })?;
        let start = start.as_u64().ok_or_else(|| {
            serde_json::Error::custom(format!("bad start: {}", value_kind(&start)))
        })?;
        let len = len.as_u64().ok_or_else(|| {
            serde_json::Error::custom(format!("bad len: {}", value_kind(&len)))
        })?;
        Ok(Self { start, len })
    }
}

#[test]
fn test_caller_defined_from_values_round_trips() {
    let span = Span { start: 7, len: 3 };
    let text = to_text(&span).unwrap();
    assert_eq!(text, r#"{"start":7,"len":3}"#);
    let back: Span = from_text(&text).unwrap();
    assert_eq!(back, span);
}

#[test]
fn test_caller_defined_from_values_reports_its_own_errors() {
    let err = from_text::<Span>(r#"{"start":7,"len":-3}"#).unwrap_err();
    assert_eq!(err.to_string(), "bad len: a number");
}
