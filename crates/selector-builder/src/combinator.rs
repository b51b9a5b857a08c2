use std::fmt;

/// Relationship tokens that join two selectors.
///
/// [`combine`](crate::SelectorState::combine) accepts any `Display` value as a
/// combinator; this enum covers the four defined by CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    pub fn symbol(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
