//! Failures reported while chaining selector parts.

use thiserror::Error;

use crate::category::Category;

/// Why a part could not be appended to a [`Selector`](crate::Selector) chain.
///
/// Both variants carry the offending [`Category`] values so callers can
/// report which flag or call site broke the chain. The builder hands back
/// the error instead of the selector; the selector the chain started from
/// is consumed and gone, which keeps half-written text from leaking out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A category that admits a single part was written twice in a row.
    ///
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// "If it contains a type selector or universal selector, that selector
    /// must come first in the sequence." An element also has at most one id
    /// and the chain renders at most one pseudo-element, so `element`, `id`
    /// and `pseudo-element` parts may not repeat.
    ///
    /// Example: `Selector::new().id("a")?.id("b")` fails with
    /// `DuplicateSingleton(Category::Id)`.
    #[error("'{0}' written twice in a row: a selector admits at most one {0} part")]
    DuplicateSingleton(Category),

    /// A part was appended left of where its category belongs.
    ///
    /// Parts are written in the canonical order `element`, `id`, `class`,
    /// `attribute`, `pseudo-class`, `pseudo-element`. Repeating the current
    /// category is allowed (for non-singletons); stepping back is not.
    ///
    /// Example: `Selector::new().class("nav")?.id("main")` fails with
    /// `OutOfOrder { previous: Class, appended: Id }`.
    #[error(
        "'{appended}' cannot follow '{previous}': parts are written in the order \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// Category of the part most recently appended to the chain.
        previous: Category,
        /// Category of the part that was rejected.
        appended: Category,
    },
}
