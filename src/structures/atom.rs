/*!
(The internal representation of) an atom, and the external variables atoms stand for.

- *External* variables are used during interaction with a context, e.g. when providing a formula or reading the value of a variable. \
  Anything cloneable, hashable, and comparable for equality may be used as a variable. Examples: `"p"`, `String::from("Alice_S1")`, `(3, 4)`.
- *Internal* atoms are used by the databases of a context.

Each internal atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

This representation allows atoms to be used as the indicies of a structure, e.g. `variables[a]`.

# Notes
- The external variable of an atom is stored in the [atom database](crate::db::atom).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. the internal representation of a variable.
pub type Atom = u32;

/// Something which may be used as an (external) variable.
pub trait Variable: Clone + Eq + std::hash::Hash + std::fmt::Debug {}

impl<T: Clone + Eq + std::hash::Hash + std::fmt::Debug> Variable for T {}
