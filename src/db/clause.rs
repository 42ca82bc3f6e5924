//! A database of clauses, indexed by [ClauseKey]s.
//!
//! Clauses are stored in a pair of slot maps, and so keys remain stable as other clauses are stored and released.
//! This allows the formula of any part of a search to be represented as a sequence of keys, with clauses untouched by an assumption shared between the formula before and after the assumption.

use slotmap::{DefaultKey, SlotMap};

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses of the formula given to the context.
    original: SlotMap<DefaultKey, CClause>,

    /// Clauses derived during a search.
    derived: SlotMap<DefaultKey, CClause>,
}

impl ClauseDB {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a clause of the formula given to the context.
    pub fn store_original(&mut self, clause: CClause) -> ClauseKey {
        let key = ClauseKey::Original(self.original.insert(clause));
        log::trace!(target: targets::CLAUSE_DB, "Stored original {key:?}");
        key
    }

    /// Stores a clause derived during a search.
    pub fn store_derived(&mut self, clause: CClause) -> ClauseKey {
        ClauseKey::Derived(self.derived.insert(clause))
    }

    /// Releases a derived clause.
    ///
    /// Original clauses are never released, and a request to release an original clause is ignored.
    pub fn release(&mut self, key: ClauseKey) {
        match key {
            ClauseKey::Original(_) => {
                log::warn!(target: targets::CLAUSE_DB, "Release requested for original {key:?}");
            }
            ClauseKey::Derived(key) => {
                self.derived.remove(key);
            }
        }
    }

    /// Releases each of the given derived clauses.
    pub fn release_all(&mut self, keys: impl IntoIterator<Item = ClauseKey>) {
        for key in keys {
            self.release(key);
        }
    }

    /// The clause stored with the key, if it has not been released.
    pub fn get(&self, key: ClauseKey) -> Option<&[CLiteral]> {
        match key {
            ClauseKey::Original(key) => self.original.get(key),
            ClauseKey::Derived(key) => self.derived.get(key),
        }
        .map(|clause| clause.as_slice())
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of derived clauses which have not been released.
    pub fn derived_count(&self) -> usize {
        self.derived.len()
    }
}

impl std::ops::Index<ClauseKey> for ClauseDB {
    type Output = [CLiteral];

    /// The clause stored with the key.
    ///
    /// # Panics
    /// If the key is for a released clause.
    /// Keys held by a search always index stored clauses.
    fn index(&self, key: ClauseKey) -> &Self::Output {
        match key {
            ClauseKey::Original(key) => &self.original[key],
            ClauseKey::Derived(key) => &self.derived[key],
        }
    }
}
