//! Entry point for building selectors.

use super::Selector;
use super::complex::{ComplexSelector, combine};
use super::compound::CompoundSelector;
use super::error::SelectorError;

/// Stateless facade over [`CompoundSelector`] and [`combine`].
///
/// Each component method starts a new compound selector from empty;
/// continue the chain on the returned value.
///
/// ```
/// use kestrel_css::selector::SelectorBuilder;
///
/// let builder = SelectorBuilder::new();
/// let link = builder.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(builder.stringify(&link), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), kestrel_css::selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorBuilder;

#[allow(clippy::unused_self)]
impl SelectorBuilder {
    /// Create the facade.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Start a compound selector with a type selector.
    ///
    /// # Errors
    ///
    /// Never fails from an empty start; the signature matches the chained
    /// form on [`CompoundSelector::element`].
    pub fn element(self, name: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().element(name)
    }

    /// Start a compound selector with `#name`.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::id`].
    pub fn id(self, name: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().id(name)
    }

    /// Start a compound selector with `.name`.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::class`].
    pub fn class(self, name: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().class(name)
    }

    /// Start a compound selector with `[expr]`.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::attr`].
    pub fn attr(self, expr: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().attr(expr)
    }

    /// Start a compound selector with `:name`.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::pseudo_class`].
    pub fn pseudo_class(self, name: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().pseudo_class(name)
    }

    /// Start a compound selector with `::name`.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::pseudo_element`].
    pub fn pseudo_element(self, name: &str) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().pseudo_element(name)
    }

    /// Join two selectors, e.g. `combine(&a, "+", &b)` renders `a + b`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidCombinator`] for an unknown symbol.
    pub fn combine<L, R>(
        self,
        left: &L,
        combinator: &str,
        right: &R,
    ) -> Result<ComplexSelector, SelectorError>
    where
        L: Selector + ?Sized,
        R: Selector + ?Sized,
    {
        combine(left, combinator, right)
    }

    /// Final text of any selector.
    #[must_use]
    pub fn stringify<S: Selector + ?Sized>(self, selector: &S) -> String {
        selector.stringify().to_string()
    }
}
