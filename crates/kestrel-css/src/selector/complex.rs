//! Joining selectors with combinators.
//!
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//! "A complex selector is a chain of one or more compound selectors
//! separated by combinators."

use std::fmt;

use serde::Serialize;
use strum_macros::EnumString;

use super::Selector;
use super::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// Every combinator.
    pub const ALL: [Self; 4] = [
        Self::Descendant,
        Self::Child,
        Self::NextSibling,
        Self::SubsequentSibling,
    ];

    /// The token that selects this combinator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Look up a combinator by its token.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidCombinator`] for anything other than
    /// `" "`, `"+"`, `"~"` or `">"`.
    pub fn from_symbol(symbol: &str) -> Result<Self, SelectorError> {
        symbol
            .parse()
            .map_err(|_| SelectorError::InvalidCombinator {
                symbol: symbol.to_string(),
            })
    }

    /// The text placed between the two operands.
    ///
    /// The descendant combinator is a single space; every other symbol is
    /// surrounded by single spaces.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => " > ",
            Self::NextSibling => " + ",
            Self::SubsequentSibling => " ~ ",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Two selectors joined by a combinator.
///
/// Only the rendered text is kept, so a complex selector is terminal for
/// grammar purposes: it can be combined again or stringified, but offers no
/// way to append simple selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComplexSelector {
    text: String,
}

impl ComplexSelector {
    /// Join `left` and `right` with `combinator`.
    ///
    /// Neither operand is re-validated; each is taken as already valid.
    #[must_use]
    pub fn new<L, R>(left: &L, combinator: Combinator, right: &R) -> Self
    where
        L: Selector + ?Sized,
        R: Selector + ?Sized,
    {
        let (left, right) = (left.stringify(), right.stringify());
        let separator = combinator.separator();

        let mut text = String::with_capacity(left.len() + separator.len() + right.len());
        text.push_str(left);
        text.push_str(separator);
        text.push_str(right);

        Self { text }
    }

    /// Rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Selector for ComplexSelector {
    fn stringify(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join two selectors with the combinator named by `symbol`.
///
/// # Errors
///
/// Returns [`SelectorError::InvalidCombinator`] if `symbol` is not one of
/// `" "`, `"+"`, `"~"`, `">"`.
pub fn combine<L, R>(left: &L, symbol: &str, right: &R) -> Result<ComplexSelector, SelectorError>
where
    L: Selector + ?Sized,
    R: Selector + ?Sized,
{
    let combinator = Combinator::from_symbol(symbol)?;
    Ok(ComplexSelector::new(left, combinator, right))
}

#[cfg(test)]
mod tests {
    use super::{Combinator, ComplexSelector, combine};
    use crate::selector::{CompoundSelector, SelectorError};

    #[test]
    fn test_symbols_round_trip() {
        for combinator in Combinator::ALL {
            assert_eq!(
                Combinator::from_symbol(combinator.symbol()).unwrap(),
                combinator
            );
        }
    }

    #[test]
    fn test_rejects_unknown_symbols() {
        for symbol in ["", "  ", ",", ">>", "||", " + "] {
            assert_eq!(
                Combinator::from_symbol(symbol),
                Err(SelectorError::InvalidCombinator {
                    symbol: symbol.to_string()
                })
            );
        }
    }

    #[test]
    fn test_separators() {
        let ul = CompoundSelector::new().element("ul").unwrap();
        let li = CompoundSelector::new().element("li").unwrap();

        assert_eq!(
            ComplexSelector::new(&ul, Combinator::Descendant, &li).text(),
            "ul li"
        );
        assert_eq!(
            ComplexSelector::new(&ul, Combinator::Child, &li).text(),
            "ul > li"
        );
        assert_eq!(combine(&ul, "+", &li).unwrap().text(), "ul + li");
        assert_eq!(combine(&ul, "~", &li).unwrap().text(), "ul ~ li");
    }

    #[test]
    fn test_empty_operands_pass_through() {
        let empty = CompoundSelector::new();
        assert_eq!(combine(&empty, ">", &empty).unwrap().text(), " > ");
    }
}
