//! Selector part categories and the specificity they contribute.

use std::fmt;

/// The category of the last part appended to a selector.
///
/// Categories are ranked in the order CSS requires them inside a compound
/// selector. A chain may only move forward through the ranks; `Class`,
/// `Attribute` and `PseudoClass` may repeat at their own rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Stage {
    /// Nothing appended yet, or the state came out of a combination.
    #[default]
    Empty = 0,
    Element = 1,
    Id = 2,
    Class = 3,
    Attribute = 4,
    PseudoClass = 5,
    PseudoElement = 6,
}

impl Stage {
    /// Numeric rank, `0` for [`Stage::Empty`] up to `6` for [`Stage::PseudoElement`].
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Returns true for parts that may occur at most once per selector.
    pub fn is_single_use(self) -> bool {
        matches!(self, Stage::Element | Stage::Id | Stage::PseudoElement)
    }

    /// Prefix and suffix wrapped around a part's value when it is appended.
    pub(crate) fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Stage::Empty | Stage::Element => ("", ""),
            Stage::Id => ("#", ""),
            Stage::Class => (".", ""),
            Stage::Attribute => ("[", "]"),
            Stage::PseudoClass => (":", ""),
            Stage::PseudoElement => ("::", ""),
        }
    }

    /// Specificity added by a single part of this category.
    pub(crate) fn specificity(self) -> Specificity {
        let mut spec = Specificity::default();
        match self {
            Stage::Id => spec.ids += 1,
            // Attributes have the same specificity as classes and pseudo-classes
            Stage::Class | Stage::Attribute | Stage::PseudoClass => spec.classes += 1,
            Stage::Element | Stage::PseudoElement => spec.types += 1,
            Stage::Empty => {}
        }
        spec
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Empty => "empty",
            Stage::Element => "element",
            Stage::Id => "id",
            Stage::Class => "class",
            Stage::Attribute => "attribute",
            Stage::PseudoClass => "pseudo-class",
            Stage::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

/// CSS specificity for determining rule precedence.
///
/// Fields are compared in declaration order, so the derived `Ord` matches the
/// usual `(ids, classes, types)` comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Self) -> Self::Output {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}
