/*!
A database of atoms, mapping external [Variable]s to internal [Atom]s and back.

Atoms are issued in order, starting from 0, as variables are first seen.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, Variable},
        literal::{CLiteral, Literal},
    },
};

/// The atom database.
pub struct AtomDB<V: Variable> {
    /// The variable of each atom, indexed by atom.
    variables: Vec<V>,

    /// The atom of each variable.
    atoms: HashMap<V, Atom>,
}

impl<V: Variable> Default for AtomDB<V> {
    fn default() -> Self {
        Self {
            variables: Vec::default(),
            atoms: HashMap::default(),
        }
    }
}

impl<V: Variable> AtomDB<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The atom of a variable, if the variable has been seen.
    pub fn atom_of(&self, variable: &V) -> Option<Atom> {
        self.atoms.get(variable).copied()
    }

    /// The atom of a variable, issuing a fresh atom if the variable has not been seen.
    pub fn atom_or_fresh(&mut self, variable: &V) -> Atom {
        match self.atoms.get(variable) {
            Some(atom) => *atom,
            None => {
                let atom = self.variables.len() as Atom;
                log::trace!(target: targets::ATOM_DB, "Fresh atom {atom} for {variable:?}");
                self.variables.push(variable.clone());
                self.atoms.insert(variable.clone(), atom);
                atom
            }
        }
    }

    /// The variable of an atom, if the atom has been issued.
    pub fn variable_of(&self, atom: Atom) -> Option<&V> {
        self.variables.get(atom as usize)
    }

    /// The internal representation of a literal, issuing a fresh atom for the variable if required.
    pub fn internal_literal(&mut self, literal: &Literal<V>) -> CLiteral {
        CLiteral::new(self.atom_or_fresh(literal.variable()), literal.polarity())
    }

    /// The external representation of a literal.
    ///
    /// # Panics
    /// If the atom of the literal was not issued by the database.
    pub fn external_literal(&self, literal: CLiteral) -> Literal<V> {
        Literal::new(self[literal.atom()].clone(), literal.polarity())
    }

    /// A count of issued atoms.
    pub fn count(&self) -> usize {
        self.variables.len()
    }
}

impl<V: Variable> std::ops::Index<Atom> for AtomDB<V> {
    type Output = V;

    fn index(&self, atom: Atom) -> &Self::Output {
        &self.variables[atom as usize]
    }
}

#[cfg(test)]
mod atom_db_tests {
    use super::*;

    #[test]
    fn atoms_issued_in_order() {
        let mut atom_db = AtomDB::new();
        assert_eq!(atom_db.atom_or_fresh(&"q"), 0);
        assert_eq!(atom_db.atom_or_fresh(&"p"), 1);
        assert_eq!(atom_db.atom_or_fresh(&"q"), 0);

        assert_eq!(atom_db.count(), 2);
        assert_eq!(atom_db.atom_of(&"p"), Some(1));
        assert_eq!(atom_db.atom_of(&"r"), None);
        assert_eq!(atom_db.variable_of(1), Some(&"p"));
        assert_eq!(atom_db.variable_of(2), None);
    }

    #[test]
    fn literals_round_trip() {
        let mut atom_db = AtomDB::new();
        let literal = Literal::new("p", false);
        let internal = atom_db.internal_literal(&literal);

        assert_eq!(internal, CLiteral::new(0, false));
        assert_eq!(atom_db.external_literal(internal), literal);
    }
}
