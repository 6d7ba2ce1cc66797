//! Errors raised while assembling a selector.

use thiserror::Error;

use super::kind::ComponentKind;

/// A grammar rule broken by a builder call.
///
/// Each variant is raised by the call that breaks the rule; the selector
/// the call was made on is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A unique kind (element, id, pseudo-element) was added a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector \
         (duplicate {kind})"
    )]
    DuplicateComponent {
        /// The kind that was repeated.
        kind: ComponentKind,
    },

    /// A kind was added after a kind that ranks above it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    OrderViolation {
        /// The kind that was rejected.
        kind: ComponentKind,
        /// The last kind already present in the selector.
        after: ComponentKind,
    },

    /// The combinator symbol is not one of `' '`, `+`, `~`, `>`.
    #[error("Unsupported combinator {symbol:?}: expected one of ' ', '+', '~', '>'")]
    InvalidCombinator {
        /// The symbol as supplied by the caller.
        symbol: String,
    },
}
