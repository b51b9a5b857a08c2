use std::fmt;

use crate::error::SelectorError;
use crate::state::SelectorState;

/// Stateless entry point for building selectors.
///
/// Every method starts a new chain from the empty template, so the facade can
/// be shared freely; it never holds any selector text itself.
///
/// ```rust
/// use selector_builder::CssSelectorBuilder;
///
/// let builder = CssSelectorBuilder;
/// let selector = builder
///     .id("main")
///     .and_then(|s| s.class("container"))
///     .and_then(|s| s.class("editable"))
///     .unwrap();
/// assert_eq!(builder.stringify(&selector), "#main.container.editable");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssSelectorBuilder;

impl CssSelectorBuilder {
    pub fn element(&self, value: impl AsRef<str>) -> Result<SelectorState, SelectorError> {
        SelectorState::new().element(value)
    }

    pub fn id(&self, value: impl AsRef<str>) -> Result<SelectorState, SelectorError> {
        SelectorState::new().id(value)
    }

    pub fn class(&self, value: impl AsRef<str>) -> Result<SelectorState, SelectorError> {
        SelectorState::new().class(value)
    }

    pub fn attr(&self, value: impl AsRef<str>) -> Result<SelectorState, SelectorError> {
        SelectorState::new().attr(value)
    }

    pub fn pseudo_class(&self, value: impl AsRef<str>) -> Result<SelectorState, SelectorError> {
        SelectorState::new().pseudo_class(value)
    }

    pub fn pseudo_element(&self, value: impl AsRef<str>) -> Result<SelectorState, SelectorError> {
        SelectorState::new().pseudo_element(value)
    }

    /// See [`SelectorState::combine`].
    pub fn combine(
        &self,
        left: &SelectorState,
        combinator: impl fmt::Display,
        right: &SelectorState,
    ) -> SelectorState {
        SelectorState::combine(left, combinator, right)
    }

    pub fn stringify<'a>(&self, state: &'a SelectorState) -> &'a str {
        state.stringify()
    }
}
