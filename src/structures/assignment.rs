/*!
A (partial) function from variables to truth values.

Assignments returned from a solve bind every variable assumed during the search, and only those variables.
So, an assignment may leave some variable of the formula unbound, as the value of the variable made no difference to whether the formula is satisfied.

```rust
# use roster_sat::structures::assignment::Assignment;
let assignment = Assignment::from_iter([("p", true), ("q", false)]);

assert_eq!(assignment.value_of(&"p"), Some(true));
assert_eq!(assignment.value_of(&"q"), Some(false));
assert_eq!(assignment.value_of(&"r"), None);
assert_eq!(assignment.len(), 2);
```

As an assignment is a function, an assignment is always consistent: no variable maps to both true and false.
*/

use std::collections::HashMap;

use crate::structures::{atom::Variable, formula::Formula};

/// An assignment of truth values to variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<V: Variable> {
    values: HashMap<V, bool>,
}

impl<V: Variable> Default for Assignment<V> {
    fn default() -> Self {
        Self {
            values: HashMap::default(),
        }
    }
}

impl<V: Variable> Assignment<V> {
    /// The empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of a variable, if the variable is bound.
    pub fn value_of(&self, variable: &V) -> Option<bool> {
        self.values.get(variable).copied()
    }

    /// Binds a variable to a value, keeping any value the variable is already bound to.
    ///
    /// Returns the value the variable is bound to after the call.
    pub fn bind(&mut self, variable: V, value: bool) -> bool {
        *self.values.entry(variable).or_insert(value)
    }

    /// An iterator over all (variable, value) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, bool)> {
        self.values.iter().map(|(variable, value)| (variable, *value))
    }

    /// An iterator over variables bound to true, in no particular order.
    pub fn true_variables(&self) -> impl Iterator<Item = &V> {
        self.iter()
            .filter_map(|(variable, value)| value.then_some(variable))
    }

    /// A count of bound variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every clause of the formula is satisfied by the assignment.
    pub fn satisfies(&self, formula: &Formula<V>) -> bool {
        formula.is_satisfied_by(self)
    }
}

impl<V: Variable> FromIterator<(V, bool)> for Assignment<V> {
    /// Collects pairs into an assignment, where the first value given to a variable takes precedence.
    fn from_iter<I: IntoIterator<Item = (V, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (variable, value) in iter {
            assignment.bind(variable, value);
        }
        assignment
    }
}

impl<V: Variable> IntoIterator for Assignment<V> {
    type Item = (V, bool);
    type IntoIter = std::collections::hash_map::IntoIter<V, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
