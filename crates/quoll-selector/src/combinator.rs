//! Punctuation joining two selectors into one complex selector.

use strum_macros::{Display, EnumIter};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Passed to [`Selector::combine`](crate::Selector::combine) to pick the
/// punctuation written between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    ///
    /// Example: `div p` selects a `p` anywhere inside a `div`.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// A greater-than sign; `A > B` selects a `B` that is a direct child
    /// of an `A`.
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// A plus sign; `A + B` selects a `B` immediately following an `A`
    /// under the same parent.
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// A tilde; `A ~ B` selects a `B` following an `A` under the same
    /// parent, not necessarily immediately.
    SubsequentSibling,
}

impl Combinator {
    /// The punctuation written between the two sides, or `None` for the
    /// descendant combinator, which is rendered as the single space that
    /// already separates the sides.
    #[must_use]
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Descendant => None,
            Self::Child => Some(">"),
            Self::NextSibling => Some("+"),
            Self::SubsequentSibling => Some("~"),
        }
    }

    /// Map a combinator symbol as written in a stylesheet to its variant.
    ///
    /// A single space selects [`Combinator::Descendant`]; `>`, `+` and `~`
    /// select the punctuated combinators. Anything else, including runs of
    /// whitespace, is `None`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}
