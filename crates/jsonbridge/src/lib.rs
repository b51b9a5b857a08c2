//! # jsonbridge
//!
//! Serialize any record to JSON and rebuild a typed record from JSON through
//! its declared positional constructor.
//!
//! Reconstruction takes the values of a JSON object in the order they appear
//! in the text and passes them, in that order, to the target shape's
//! constructor. The keys themselves are not consulted, so the text's field
//! order must match the constructor's parameter order.
//! [`deserialize_named`] lifts that restriction by matching keys to the
//! shape's parameter names.
//!
//! ## Usage
//!
//! ```
//! use jsonbridge::{Reconstruct, deserialize, deserialize_named, serialize};
//! use serde::Serialize;
//!
//! #[derive(Debug, PartialEq, Serialize, Reconstruct)]
//! struct Size {
//!     width: u32,
//!     height: u32,
//! }
//!
//! let json = serialize(&Size { width: 10, height: 20 }).unwrap();
//! assert_eq!(json, r#"{"width":10,"height":20}"#);
//!
//! let size: Size = deserialize(&json).unwrap();
//! assert_eq!(size, Size { width: 10, height: 20 });
//!
//! // Positional reconstruction ignores key names...
//! let swapped: Size = deserialize(r#"{"height":20,"width":10}"#).unwrap();
//! assert_eq!(swapped, Size { width: 20, height: 10 });
//!
//! // ...named reconstruction does not.
//! let named: Size = deserialize_named(r#"{"height":20,"width":10}"#).unwrap();
//! assert_eq!(named, Size { width: 10, height: 20 });
//! ```
//!
//! ## Derive attributes
//!
//! - `#[reconstruct(name = "Label")]`: shape name used in error messages
//! - `#[reconstruct(constructor = Self::new)]`: call a custom constructor with
//!   the positional values instead of building the struct literal
//! - `#[reconstruct(rename = "key")]` on a field: parameter name used by
//!   [`deserialize_named`]
//! - `#[reconstruct(skip)]` on a field: not a parameter, filled with its
//!   type's default
//! - `#[reconstruct(crate = path::to::jsonbridge)]`: where the generated impl
//!   finds this crate, for callers that depend on a re-export of it (defaults
//!   to `::jsonbridge`)

mod bridge;
pub mod error;
pub mod shape;

pub use bridge::{deserialize, deserialize_named, serialize};
pub use error::{ConstructionError, JsonBridgeError, ParseError};
#[cfg(feature = "derive")]
pub use jsonbridge_macros::Reconstruct;
pub use shape::{Arguments, Reconstruct};
