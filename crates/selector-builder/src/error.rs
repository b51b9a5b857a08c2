//! Error types for selector building.
//!
//! Both variants keep the receiving [`SelectorState`](crate::SelectorState)
//! intact: a failed call never consumes or alters the chain it was made on.

use thiserror::Error;

use crate::stage::Stage;

/// Errors raised when a selector part is appended in a position CSS does not allow.
///
/// # Examples
///
/// ```rust
/// use selector_builder::{CssSelectorBuilder, SelectorError};
///
/// let builder = CssSelectorBuilder;
/// let div = builder.element("div").unwrap();
///
/// // A compound selector can only name one element
/// let err = div.element("span").unwrap_err();
/// assert!(matches!(err, SelectorError::DuplicateSelectorPart { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A single-use part (element, id, pseudo-element) was appended twice.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector"
    )]
    DuplicateSelectorPart {
        /// The part that was rejected.
        part: Stage,
    },

    /// A part was appended after a part that must come later.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    SelectorOrder {
        /// The part that was rejected.
        part: Stage,
        /// The stage the selector had already reached.
        current: Stage,
    },
}

impl SelectorError {
    /// The part whose append was rejected.
    pub fn part(&self) -> Stage {
        match self {
            SelectorError::DuplicateSelectorPart { part } => *part,
            SelectorError::SelectorOrder { part, .. } => *part,
        }
    }
}
