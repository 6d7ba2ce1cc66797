//! Compound selector accumulation.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."

use std::fmt;

use serde::Serialize;

use super::Selector;
use super::error::SelectorError;
use super::kind::ComponentKind;

/// An immutable, partially or fully built compound selector.
///
/// Holds the kinds added so far, in insertion order, and the text rendered
/// so far. Every add returns a new value; the receiver stays valid and can
/// seed other chains.
///
/// Invariants, upheld by [`CompoundSelector::add_component`]:
/// - `history` never decreases in [`ComponentKind::rank`]
/// - each unique kind appears at most once in `history`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CompoundSelector {
    history: Vec<ComponentKind>,
    text: String,
}

impl CompoundSelector {
    /// An empty selector: no history, empty text.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
            text: String::new(),
        }
    }

    /// Kinds added so far, in insertion order.
    #[must_use]
    pub fn history(&self) -> &[ComponentKind] {
        &self.history
    }

    /// Text rendered so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if nothing has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Append an already rendered fragment of the given kind.
    ///
    /// The fragment is juxtaposed with the existing text, no separator.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateComponent`] if `kind` is unique and
    ///   already present.
    /// - [`SelectorError::OrderViolation`] if `kind` ranks below the last
    ///   kind added.
    pub fn add_component(&self, kind: ComponentKind, fragment: &str) -> Result<Self, SelectorError> {
        if kind.is_unique() && self.history.contains(&kind) {
            return Err(SelectorError::DuplicateComponent { kind });
        }

        if let Some(&last) = self.history.last().filter(|last| kind.rank() < last.rank()) {
            return Err(SelectorError::OrderViolation { kind, after: last });
        }

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(kind);

        let mut text = String::with_capacity(self.text.len() + fragment.len());
        text.push_str(&self.text);
        text.push_str(fragment);

        Ok(Self { history, text })
    }

    /// Format `value` for `kind` and append it.
    ///
    /// # Errors
    ///
    /// Same as [`CompoundSelector::add_component`].
    pub fn push(&self, kind: ComponentKind, value: &str) -> Result<Self, SelectorError> {
        self.add_component(kind, &kind.format(value))
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Fails if an element is already present or anything has been added
    /// before it.
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(ComponentKind::Element, name)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#name`.
    ///
    /// # Errors
    ///
    /// Fails if an id is already present or a later-ranked kind has been
    /// added.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(ComponentKind::Id, name)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.name`. May repeat.
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class or pseudo-element has been added.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(ComponentKind::Class, name)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[expr]`. The expression is written verbatim, e.g.
    /// `href$=".png"`. May repeat.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element has been added.
    pub fn attr(&self, expr: &str) -> Result<Self, SelectorError> {
        self.push(ComponentKind::Attribute, expr)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:name`, e.g. `:nth-of-type(even)`. May repeat.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element has been added.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(ComponentKind::PseudoClass, name)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append `::name`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(ComponentKind::PseudoElement, name)
    }
}

impl Selector for CompoundSelector {
    fn stringify(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
