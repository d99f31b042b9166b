//! Category-checked construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Part categories** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - The six part categories: element, id, class, attribute, pseudo-class, pseudo-element
//!   - A fixed canonical writing order between them, with singleton rules
//!     for the categories a selector admits only once
//!
//! - **Fluent builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Immutable chaining: every call returns a new selector snapshot,
//!     so prefixes can be branched by cloning
//!   - Sequencing checks at append time, reported as typed errors
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling joins
//!     between finished selectors
//!
//! # Not Yet Implemented
//!
//! - Selector lists (`h1, h2`)
//! - Functional pseudo-class arguments as structured values (`:not(...)`
//!   takes its argument as part of the name text)
//! - Namespace prefixes (`svg|circle`)
//! - Identifier validation and escaping (values are written verbatim)

/// Selector part categories and the canonical writing order between them.
pub mod category;
/// Combinators per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Failures reported while chaining selector parts.
pub mod error;
/// The fluent selector builder.
pub mod selector;

// Re-exports for convenience
pub use category::{Category, validate_sequence};
pub use combinator::Combinator;
pub use error::SelectorError;
pub use selector::Selector;
