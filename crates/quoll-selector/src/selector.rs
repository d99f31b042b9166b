//! The fluent selector builder.

use std::fmt;

use crate::category::{Category, validate_sequence};
use crate::combinator::Combinator;
use crate::error::SelectorError;

/// An immutable, category-checked CSS selector under construction.
///
/// Parts are appended with the chain methods ([`element`](Self::element),
/// [`id`](Self::id), [`class`](Self::class), ...), each of which consumes
/// the selector and returns either the extended selector or a
/// [`SelectorError`] naming what broke the chain. Failed calls consume the
/// selector too, so text from a rejected chain can never be read back.
///
/// Every value in a chain is a self-contained snapshot. Cloning one and
/// extending the clone leaves the original untouched, so a common prefix
/// can be branched into several selectors:
///
/// ```
/// use quoll_selector::Selector;
///
/// # fn main() -> Result<(), quoll_selector::SelectorError> {
/// let buttons = Selector::new().element("button")?;
/// let primary = buttons.clone().class("primary")?;
/// let disabled = buttons.pseudo_class("disabled")?;
/// assert_eq!(primary.as_str(), "button.primary");
/// assert_eq!(disabled.as_str(), "button:disabled");
/// # Ok(())
/// # }
/// ```
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// requires a type selector to come first; the builder fixes the full
/// writing order (see [`Category`]) and rejects parts appended out of
/// order, as well as back-to-back repeats of the singleton categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Selector text accumulated so far.
    text: String,
    /// Category of the most recently appended part. `None` for an empty
    /// selector and directly after [`Selector::combine`], both of which
    /// accept any category next.
    last: Option<Category>,
}

impl Selector {
    /// Create an empty selector. Any category may be appended first.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last: None,
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Appends `name` bare, e.g. `div`. The value is written as-is; the
    /// builder does not validate identifier syntax.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateSingleton`] when the previous part
    /// is already a type selector, and [`SelectorError::OutOfOrder`] when
    /// any other part precedes it.
    pub fn element(mut self, name: &str) -> Result<Self, SelectorError> {
        self.advance(Category::Element)?;
        self.text.push_str(name);
        Ok(self)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Appends `#name`, e.g. `#main`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateSingleton`] when the previous part
    /// is already an id, and [`SelectorError::OutOfOrder`] when a part of
    /// a later category precedes it.
    pub fn id(mut self, name: &str) -> Result<Self, SelectorError> {
        self.advance(Category::Id)?;
        self.text.push('#');
        self.text.push_str(name);
        Ok(self)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Appends `.name`, e.g. `.container`. Classes stack, so repeated calls
    /// are fine: `.container.editable`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] when a part of a later
    /// category precedes it.
    pub fn class(mut self, name: &str) -> Result<Self, SelectorError> {
        self.advance(Category::Class)?;
        self.text.push('.');
        self.text.push_str(name);
        Ok(self)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Appends `[expr]`. The expression between the brackets is taken
    /// verbatim, so every attribute form is available without the builder
    /// knowing the operator grammar: `attr("href")`, `attr("lang|=en")`,
    /// `attr(r#"src$=".png""#)`. Attribute conditions stack.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] when a pseudo-class or
    /// pseudo-element precedes it.
    pub fn attr(mut self, expr: &str) -> Result<Self, SelectorError> {
        self.advance(Category::Attribute)?;
        self.text.push('[');
        self.text.push_str(expr);
        self.text.push(']');
        Ok(self)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Appends `:name`, e.g. `:hover`. Pass the name without the leading
    /// colon. Functional notation works by writing the arguments into the
    /// name: `pseudo_class("nth-child(2)")`. Pseudo-classes stack.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] when a pseudo-element
    /// precedes it.
    pub fn pseudo_class(mut self, name: &str) -> Result<Self, SelectorError> {
        self.advance(Category::PseudoClass)?;
        self.text.push(':');
        self.text.push_str(name);
        Ok(self)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "Pseudo-elements are represented by a pair of colons (::) followed
    /// by the name of the pseudo-element."
    ///
    /// Appends `::name`, e.g. `::before`. Pass the name without the
    /// leading colons. The last category in the canonical order, so it can
    /// only close a chain.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateSingleton`] when the previous part
    /// is already a pseudo-element.
    pub fn pseudo_element(mut self, name: &str) -> Result<Self, SelectorError> {
        self.advance(Category::PseudoElement)?;
        self.text.push_str("::");
        self.text.push_str(name);
        Ok(self)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    /// "A combinator is punctuation that represents a particular kind of
    /// relationship between the selectors on either side."
    ///
    /// Join two selectors into one complex selector. Punctuated combinators
    /// are rendered with a space on each side (`div > p`); the descendant
    /// combinator is the separating space itself (`div p`).
    ///
    /// The sides are joined as-is; neither is re-validated. The result
    /// starts a fresh compound on the right, so any category may be
    /// appended next:
    ///
    /// ```
    /// use quoll_selector::{Combinator, Selector};
    ///
    /// # fn main() -> Result<(), quoll_selector::SelectorError> {
    /// let item = Selector::combine(
    ///     Selector::new().element("ul")?.class("nav")?,
    ///     Combinator::Child,
    ///     Selector::new().element("li")?,
    /// );
    /// assert_eq!(item.as_str(), "ul.nav > li");
    /// assert_eq!(item.element("span")?.as_str(), "ul.nav > lispan");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// As the second assertion shows, appending an `element` right after a
    /// join concatenates names. Extend the right side before joining when
    /// that is not what you want.
    #[must_use]
    pub fn combine(left: Self, combinator: Combinator, right: Self) -> Self {
        // Extend the left side's buffer rather than formatting a third one.
        let mut text = left.into_string();
        if let Some(token) = combinator.token() {
            text.push(' ');
            text.push_str(token);
        }
        text.push(' ');
        text.push_str(&right.into_string());
        Self { text, last: None }
    }

    /// The selector text accumulated so far. Reading it does not change
    /// the chain; the same selector renders the same text every time.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Consume the selector and take its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether nothing has been appended. An empty selector renders as the
    /// empty string.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Category of the most recently appended part, which is what the next
    /// chain call will be checked against. `None` for an empty selector
    /// and directly after [`Selector::combine`].
    #[must_use]
    pub const fn last_category(&self) -> Option<Category> {
        self.last
    }

    /// Run the sequencing check for `category` and record it as the new
    /// tail of the chain.
    fn advance(&mut self, category: Category) -> Result<(), SelectorError> {
        validate_sequence(self.last, category)?;
        self.last = Some(category);
        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
