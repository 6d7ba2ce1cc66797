//! CSS selector construction
//!
//! Builds selector text incrementally per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), rejecting
//! compound selectors whose parts are repeated or out of order.
//!
//! ```
//! use kestrel_css::selector::{Selector, SelectorBuilder};
//!
//! let builder = SelectorBuilder::new();
//! let table = builder.element("table")?.id("data")?;
//! let row = builder.element("tr")?;
//! let selector = builder.combine(&table, "~", &row)?;
//! assert_eq!(selector.stringify(), "table#data ~ tr");
//! # Ok::<(), kestrel_css::selector::SelectorError>(())
//! ```

mod builder;
mod complex;
mod compound;
mod error;
mod kind;

pub use builder::SelectorBuilder;
pub use complex::{Combinator, ComplexSelector, combine};
pub use compound::CompoundSelector;
pub use error::SelectorError;
pub use kind::ComponentKind;

/// Anything that renders to selector text.
pub trait Selector {
    /// The final selector text, exactly as built.
    fn stringify(&self) -> &str;
}
