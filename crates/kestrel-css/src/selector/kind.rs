//! Component kinds of a compound selector and their grammar table.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "If it contains a type selector or universal selector, that selector
//! must come first in the sequence."
//!
//! The builder enforces a stricter canonical order over all six kinds:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\----------/
//!           may repeat
//! ```

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// One kind of simple selector that may appear inside a compound selector.
///
/// Variants are declared in canonical grammar order, so the derived
/// `Ord` agrees with [`ComponentKind::rank`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered as the bare tag name: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Rendered with a leading hash: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Rendered with a leading full stop: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered inside brackets: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered with a single colon: `:focus`, `:nth-of-type(even)`
    #[strum(to_string = "pseudoClass", serialize = "pseudo-class")]
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Rendered with a double colon: `::before`
    #[strum(to_string = "pseudoElement", serialize = "pseudo-element")]
    PseudoElement,
}

impl ComponentKind {
    /// Every kind, in canonical grammar order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the canonical grammar order, starting at 0.
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

    /// Whether this kind may occur at most once in a compound selector.
    ///
    /// Element, id and pseudo-element are unique; class, attribute and
    /// pseudo-class may repeat.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The sigil written before a value of this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// The text written after a value of this kind.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Render `value` as a selector fragment of this kind.
    ///
    /// The value is passed through verbatim; its syntax is not checked.
    #[must_use]
    pub fn format(self, value: &str) -> String {
        format!("{}{value}{}", self.prefix(), self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::ComponentKind;

    #[test]
    fn test_ranks_follow_declaration_order() {
        for (expected, kind) in ComponentKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.rank()), expected);
        }
        assert!(ComponentKind::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_unique_kinds() {
        let unique: Vec<_> = ComponentKind::ALL
            .into_iter()
            .filter(|kind| kind.is_unique())
            .collect();
        assert_eq!(
            unique,
            vec![
                ComponentKind::Element,
                ComponentKind::Id,
                ComponentKind::PseudoElement
            ]
        );
    }

    #[test]
    fn test_format_fragments() {
        assert_eq!(ComponentKind::Element.format("div"), "div");
        assert_eq!(ComponentKind::Id.format("main"), "#main");
        assert_eq!(ComponentKind::Class.format("btn"), ".btn");
        assert_eq!(
            ComponentKind::Attribute.format("href$=\".png\""),
            "[href$=\".png\"]"
        );
        assert_eq!(ComponentKind::PseudoClass.format("focus"), ":focus");
        assert_eq!(ComponentKind::PseudoElement.format("after"), "::after");
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(ComponentKind::PseudoClass.to_string(), "pseudoClass");
        assert_eq!(ComponentKind::Attribute.to_string(), "attribute");
        assert_eq!(
            ComponentKind::from_str("attr").unwrap(),
            ComponentKind::Attribute
        );
        assert_eq!(
            ComponentKind::from_str("pseudo-element").unwrap(),
            ComponentKind::PseudoElement
        );
        assert!(ComponentKind::from_str("universal").is_err());
    }
}
