//! Literals are variables (or atoms) paired with a (boolean) polarity.
//!
//! The external representation is [Literal], paired over any [Variable].
//! The internal representation is [CLiteral], paired over an [Atom].
//!
//! ```rust
//! # use roster_sat::structures::literal::Literal;
//! let literal = Literal::new("p", true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), &"p");
//! assert_eq!(literal.negate(), Literal::new("p", false));
//! assert_eq!(literal.negate().to_string(), "-\"p\"");
//! ```

use crate::structures::atom::{Atom, Variable};

/// A variable paired with the value it is required to have.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal<V: Variable> {
    /// The variable of the literal.
    variable: V,

    /// The polarity of the literal.
    polarity: bool,
}

impl<V: Variable> Literal<V> {
    /// A fresh literal, specified by pairing a variable with a boolean.
    pub fn new(variable: V, polarity: bool) -> Self {
        Self { variable, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            variable: self.variable.clone(),
            polarity: !self.polarity,
        }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

impl<V: Variable> From<(V, bool)> for Literal<V> {
    fn from((variable, polarity): (V, bool)) -> Self {
        Self::new(variable, polarity)
    }
}

impl<V: Variable> std::fmt::Display for Literal<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{:?}", self.variable),
            false => write!(f, "-{:?}", self.variable),
        }
    }
}

/// The canonical (internal) representation of a literal, as an atom paired with a boolean.
///
/// Literals are ordered by atom and then polarity, with 'false' being (strictly) less than 'true'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl CLiteral {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
