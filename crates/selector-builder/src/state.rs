//! The immutable selector value every builder step produces.

use std::fmt;

use crate::error::SelectorError;
use crate::stage::{Specificity, Stage};

/// A selector under construction.
///
/// Each method takes `&self` and returns a fresh state, so a chain can be
/// forked at any point and both branches keep growing independently:
///
/// ```rust
/// use selector_builder::SelectorState;
///
/// let base = SelectorState::new().element("li").unwrap();
/// let first = base.pseudo_class("first-child").unwrap();
/// let odd = base.class("odd").unwrap();
///
/// assert_eq!(base.stringify(), "li");
/// assert_eq!(first.stringify(), "li:first-child");
/// assert_eq!(odd.stringify(), "li.odd");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectorState {
    text: String,
    stage: Stage,
    specificity: Specificity,
}

impl SelectorState {
    /// The empty template every chain starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a type selector (`div`). At most one per selector.
    pub fn element(&self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.append(Stage::Element, value.as_ref())
    }

    /// Appends an id selector (`#main`). At most one per selector.
    pub fn id(&self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.append(Stage::Id, value.as_ref())
    }

    /// Appends a class selector (`.active`).
    pub fn class(&self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.append(Stage::Class, value.as_ref())
    }

    /// Appends an attribute selector. The value goes between the brackets
    /// unchanged, so `href$=".png"` becomes `[href$=".png"]`.
    pub fn attr(&self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.append(Stage::Attribute, value.as_ref())
    }

    /// Appends a pseudo-class (`:hover`).
    pub fn pseudo_class(&self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.append(Stage::PseudoClass, value.as_ref())
    }

    /// Appends a pseudo-element (`::before`). At most one per selector.
    pub fn pseudo_element(&self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.append(Stage::PseudoElement, value.as_ref())
    }

    /// Joins two selectors with a combinator: `"<left> <combinator> <right>"`.
    ///
    /// Neither operand's stage is checked or carried over. The result starts
    /// again at [`Stage::Empty`], and its specificity is the sum of both sides.
    pub fn combine(
        left: &SelectorState,
        combinator: impl fmt::Display,
        right: &SelectorState,
    ) -> SelectorState {
        let text = format!("{} {} {}", left.text, combinator, right.text);
        log::trace!("combine: {:?}", text);

        SelectorState {
            text,
            stage: Stage::Empty,
            specificity: left.specificity + right.specificity,
        }
    }

    /// The selector text accumulated so far.
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// The category of the last appended part.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Checks that `part` may follow the current stage.
    ///
    /// A repeated single-use part is a duplicate; anything moving backwards is
    /// out of order. The duplicate check only applies when the incoming part
    /// is the same category as the current stage.
    fn check(&self, part: Stage) -> Result<(), SelectorError> {
        if part == self.stage && part.is_single_use() {
            return Err(SelectorError::DuplicateSelectorPart { part });
        }
        if part < self.stage {
            return Err(SelectorError::SelectorOrder {
                part,
                current: self.stage,
            });
        }
        Ok(())
    }

    fn append(&self, part: Stage, value: &str) -> Result<Self, SelectorError> {
        if let Err(err) = self.check(part) {
            log::debug!(
                "rejected {} {:?} after {} in {:?}: {}",
                part,
                value,
                self.stage,
                self.text,
                err
            );
            return Err(err);
        }

        let (prefix, suffix) = part.delimiters();
        let mut text =
            String::with_capacity(self.text.len() + prefix.len() + value.len() + suffix.len());
        text.push_str(&self.text);
        text.push_str(prefix);
        text.push_str(value);
        text.push_str(suffix);
        log::trace!("{}: {:?} -> {:?}", part, self.text, text);

        Ok(SelectorState {
            text,
            stage: part,
            specificity: self.specificity + part.specificity(),
        })
    }
}

impl fmt::Display for SelectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
