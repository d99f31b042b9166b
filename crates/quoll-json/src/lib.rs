//! JSON text interchange for Quoll value types.
//!
//! # Scope
//!
//! This crate implements:
//! - **Encoding** ([RFC 8259](https://datatracker.ietf.org/doc/html/rfc8259))
//!   - Any [`Serialize`] value to compact or indented JSON text
//!   - Object members in insertion order (struct fields in declaration
//!     order), so encoded text is stable across runs
//!
//! - **Decoding by member order**
//!   - [`from_text`] parses a document and hands its member values, in
//!     document order, to a [`FromValues`] implementation
//!   - Implementations for the `quoll-geometry` value types
//!
//! # Not Yet Implemented
//!
//! - Keyed reconstruction: [`FromValues`] sees member values only, names
//!   are dropped
//! - Streaming readers and writers (`io::Read` / `io::Write` endpoints)
//!
//! [RFC 8259 § 4](https://datatracker.ietf.org/doc/html/rfc8259#section-4)
//! calls an object "an unordered collection of zero or more name/value
//! pairs"; decoding by member order is therefore a convention of this
//! crate, not of JSON. Documents produced by [`to_text`] honour it
//! because encoding preserves insertion order.

use quoll_geometry::Rectangle;
use serde::Serialize;
use serde::de::Error as _;
use serde_json::Value;

/// Encode a value as compact JSON text.
///
/// # Errors
///
/// Returns an error when the value cannot be represented as JSON, for
/// example a map with non-string keys or a non-finite float behind a
/// type that forbids it.
pub fn to_text<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value)
}

/// Encode a value as indented JSON text, for logs and fixtures.
///
/// # Errors
///
/// Fails for the same values as [`to_text`].
pub fn to_text_pretty<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(value)
}

/// Types that can be rebuilt from the member values of a decoded JSON
/// document, taken in document order.
///
/// Implementations receive the values with their member names dropped:
/// `{"width":10.0,"height":20.0}` and `[10.0, 20.0]` arrive as the same
/// two-element `Vec`. An implementation owns the arity and type checks
/// for its own shape; [`value_kind`] helps phrase the failures.
pub trait FromValues: Sized {
    /// Rebuild `Self` from member values in document order.
    ///
    /// # Errors
    ///
    /// Returns an error when the number of values or the type of any
    /// value does not fit `Self`.
    fn from_values(values: Vec<Value>) -> serde_json::Result<Self>;
}

/// Decode JSON text and rebuild a `T` from its member values in document
/// order.
///
/// The top level of the document must be an object or an array; which of
/// the two does not matter, since member names are dropped either way.
///
/// ```
/// use quoll_geometry::Rectangle;
/// use quoll_json::from_text;
///
/// let rect: Rectangle = from_text(r#"{"width":10.0,"height":20.0}"#)?;
/// assert!((rect.area() - 200.0).abs() < f64::EPSILON);
/// # Ok::<(), serde_json::Error>(())
/// ```
///
/// # Errors
///
/// Returns the parse error for malformed text, an error for a top-level
/// value that is not an object or array, and whatever
/// [`FromValues::from_values`] reports for a shape mismatch.
pub fn from_text<T: FromValues>(text: &str) -> serde_json::Result<T> {
    let document: Value = serde_json::from_str(text)?;
    let values = match document {
        Value::Object(members) => members.into_iter().map(|(_, value)| value).collect(),
        Value::Array(items) => items,
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected a JSON object or array at the top level, got {}",
                value_kind(&other)
            )));
        }
    };
    T::from_values(values)
}

/// Human-readable kind of a JSON value, for error messages.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl FromValues for Rectangle {
    /// A rectangle is two numeric members, width first, height second.
    fn from_values(values: Vec<Value>) -> serde_json::Result<Self> {
        let [width, height] = <[Value; 2]>::try_from(values).map_err(|values| {
            serde_json::Error::custom(format!(
                "expected 2 values for a rectangle, got {}",
                values.len()
            ))
        })?;
        let width = require_number("width", &width)?;
        let height = require_number("height", &height)?;
        Ok(Self::new(width, height))
    }
}

/// Read a member as `f64` or report which rectangle field was malformed.
fn require_number(field: &'static str, value: &Value) -> serde_json::Result<f64> {
    value.as_f64().ok_or_else(|| {
        serde_json::Error::custom(format!(
            "expected a number for rectangle {field}, got {}",
            value_kind(value)
        ))
    })
}
