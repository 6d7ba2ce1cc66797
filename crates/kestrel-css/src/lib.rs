//! CSS selector construction for Kestrel.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Canonical part order and at-most-once rules, checked on every addition
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity and cascade
//! - Validation of names and values inside selector parts

/// Selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use selector::{
    Combinator, ComplexSelector, ComponentKind, CompoundSelector, Selector, SelectorBuilder,
    SelectorError, combine,
};
