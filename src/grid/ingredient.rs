//! The two ingredient labels a grid cell can carry.

use std::fmt;

/// Ingredient placed on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ingredient {
    Tomato,
    Mushroom,
}

impl Ingredient {
    /// Parses the single-character label used by the input format.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'T' => Some(Ingredient::Tomato),
            'M' => Some(Ingredient::Mushroom),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Ingredient::Tomato => 'T',
            Ingredient::Mushroom => 'M',
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
