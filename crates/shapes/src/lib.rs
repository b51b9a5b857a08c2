//! Simple geometric records.
//!
//! Each shape serializes with serde and implements
//! [`jsonbridge::Reconstruct`], so it can be rebuilt from the JSON it
//! serializes to.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::{Rectangle, make_rectangle};
