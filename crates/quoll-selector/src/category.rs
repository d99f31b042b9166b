//! Selector part categories and the canonical writing order between them.

use strum_macros::{Display, EnumIter};

use crate::error::SelectorError;

/// The category of a single part within a compound selector.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// The grammar only pins down the two ends of that sequence (a type selector
/// must come first, pseudo-elements come last). Variant order here is the
/// full canonical writing order enforced by [`Selector`](crate::Selector),
/// stricter than the grammar requires, so that the same set of parts always
/// produces the same selector text.
///
/// The `Display` form is the lowercase hyphenated name (`pseudo-class`),
/// which is how categories appear in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// A bracketed condition on an element attribute.
    ///
    /// Examples: `[href]`, `[src$=".png"]`, `[lang|=en]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// A colon-prefixed condition on element state or structure.
    ///
    /// Examples: `:hover`, `:focus`, `:first-child`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "Pseudo-elements represent abstract elements of the document beyond
    /// those elements explicitly created by the document language."
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl Category {
    /// Position of this category in the canonical writing order.
    ///
    /// Lower ranks are written further to the left. Ranks agree with the
    /// derived `Ord`; they exist so the ordering rule can be stated as
    /// plain arithmetic: a part may follow another when its rank is equal
    /// or greater.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Whether a selector admits at most one part of this category.
    ///
    /// An element has exactly one type and at most one id, and the chain
    /// renders a single pseudo-element, so those three may not repeat.
    /// Classes, attribute conditions and pseudo-classes stack freely.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// Check whether a part of category `appended` may extend a chain whose most
/// recent part has category `previous` (`None` for an empty chain).
///
/// Two rules, applied in this order:
///
/// 1. A singleton category may not be written twice in a row. This is
///    checked first so that `id().id()` reports duplication rather than a
///    misleading ordering failure.
/// 2. The appended rank must be equal to or greater than the previous rank.
///    Equal ranks repeat (`.a.b.c` stacks classes); smaller ranks step
///    backwards in the canonical order and are rejected.
///
/// Only the immediately preceding part is consulted. A singleton that
/// reappears further left in the chain is caught by rule 2 instead, since
/// reaching it again always means stepping back in rank.
///
/// # Errors
///
/// Returns [`SelectorError::DuplicateSingleton`] when rule 1 fails and
/// [`SelectorError::OutOfOrder`] when rule 2 fails.
pub fn validate_sequence(
    previous: Option<Category>,
    appended: Category,
) -> Result<(), SelectorError> {
    let Some(previous) = previous else {
        // Every category may open a chain.
        return Ok(());
    };

    if appended == previous && appended.is_singleton() {
        return Err(SelectorError::DuplicateSingleton(appended));
    }

    if appended.rank() < previous.rank() {
        return Err(SelectorError::OutOfOrder { previous, appended });
    }

    Ok(())
}
