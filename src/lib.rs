//! # objkit
//!
//! Three small, independent utilities behind one facade:
//!
//! - [`shapes`]: a rectangle record with a computed area (and a circle)
//! - [`jsonbridge`]: JSON serialization and reconstruction of typed records
//!   through a declared positional constructor
//! - [`selector_builder`]: an immutable fluent builder for CSS selectors that
//!   checks part order and cardinality
//!
//! Errors from every component convert into [`Error`], so mixed code can use `?`
//! with [`Result`]:
//!
//! ```rust
//! use objkit::{CssSelectorBuilder, Rectangle, deserialize, serialize};
//!
//! fn demo() -> objkit::Result<String> {
//!     let rect: Rectangle = deserialize(&serialize(&Rectangle::new(2.0, 3.0))?)?;
//!     let builder = CssSelectorBuilder;
//!     let selector = builder.element("canvas")?.attr(format!("data-area=\"{}\"", rect.area()))?;
//!     Ok(selector.to_string())
//! }
//!
//! assert_eq!(demo().unwrap(), r#"canvas[data-area="6"]"#);
//! ```
//!
//! Crates that depend on `objkit` alone point the derive at the re-export:
//!
//! ```rust
//! use objkit::{Reconstruct, deserialize};
//!
//! #[derive(Debug, PartialEq, Reconstruct)]
//! #[reconstruct(crate = objkit::jsonbridge)]
//! struct Size {
//!     w: u32,
//!     h: u32,
//! }
//!
//! assert_eq!(deserialize::<Size>("[3, 4]").unwrap(), Size { w: 3, h: 4 });
//! ```

pub mod error;

pub use jsonbridge;
pub use selector_builder;
pub use shapes;

pub use error::{Error, Result};
pub use jsonbridge::{
    ConstructionError, JsonBridgeError, ParseError, Reconstruct, deserialize, deserialize_named,
    serialize,
};
pub use selector_builder::{
    Combinator, CssSelectorBuilder, SelectorError, SelectorState, Specificity, Stage,
};
pub use shapes::{Circle, Rectangle, make_rectangle};
