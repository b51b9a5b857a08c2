//! # selector-builder
//!
//! An immutable, fluent builder for CSS selector strings.
//!
//! A compound selector is made of parts that CSS expects in a fixed order:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\-----------/
//!           may repeat
//! ```
//!
//! The builder enforces that order and the "at most once" rule for element, id
//! and pseudo-element. It does not look inside the values: `attr("href$=\".png\"")`
//! is appended verbatim.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector_builder::{Combinator, CssSelectorBuilder};
//!
//! let builder = CssSelectorBuilder;
//!
//! let link = builder
//!     .element("a")
//!     .and_then(|s| s.attr("href$=\".png\""))
//!     .and_then(|s| s.pseudo_class("focus"))
//!     .unwrap();
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let row = builder.element("tr").unwrap();
//! let cell = builder.element("td").unwrap();
//! let nested = builder.combine(&row, Combinator::Child, &cell);
//! assert_eq!(nested.stringify(), "tr > td");
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the [`SelectorState`] value and its part methods
//! - [`stage`]: part categories and [`Specificity`]
//! - [`error`]: ordering and duplicate-part errors

mod builder;
mod combinator;
pub mod error;
pub mod stage;
pub mod state;

pub use builder::CssSelectorBuilder;
pub use combinator::Combinator;
pub use error::SelectorError;
pub use stage::{Specificity, Stage};
pub use state::SelectorState;
