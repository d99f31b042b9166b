//! Plain geometric value types shared across the Quoll crates.
//!
//! Deliberately a leaf crate: values only, no styling or selector
//! concerns, so anything may depend on it without pulling those in.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
///
/// Serializes as an object with `width` first and `height` second, in
/// declaration order, which is the member order the interchange helpers
/// in `quoll-json` rely on when rebuilding one from a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its side lengths.
    ///
    /// Lengths are taken as given; nothing rejects a negative or
    /// non-finite value.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The area enclosed by the rectangle, `width * height`.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}
