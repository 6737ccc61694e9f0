// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Owned atom collection with insertion order and an id index.

use std::collections::HashMap;

use crate::atom::{Atom, AtomId};
use crate::graph::{project_to_graph, GraphData};
use crate::query::{self, AtomLookup};
use crate::seed::seed_atoms;

/// In-memory AtomSpace.
///
/// Atoms are kept in insertion order (the order every by-name lookup scans)
/// with a side index from id to position. There is no per-atom removal; the
/// whole collection is swapped by [`AtomSpace::reset`].
///
/// # Invariants
///
/// - Ids are unique; [`AtomSpace::insert`] refuses a duplicate id.
/// - `index[atoms[i].id] == i` for every position `i`.
/// - Outgoing ids are never checked against membership.
#[derive(Debug, Clone, Default)]
pub struct AtomSpace {
    atoms: Vec<Atom>,
    index: HashMap<AtomId, usize>,
}

impl AtomSpace {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample seed.
    pub fn seeded() -> Self {
        Self::from_atoms(seed_atoms())
    }

    /// Build a store from a snapshot. The first atom wins on duplicate ids.
    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        let mut space = Self::new();
        for atom in atoms {
            space.insert(atom);
        }
        space
    }

    /// Append an atom. Returns `false` (and leaves the store unchanged) when
    /// the id is already taken.
    ///
    /// Truth values are not validated here; see [`crate::TruthValue::checked`].
    pub fn insert(&mut self, atom: Atom) -> bool {
        if self.index.contains_key(&atom.id) {
            return false;
        }
        self.index.insert(atom.id.clone(), self.atoms.len());
        self.atoms.push(atom);
        true
    }

    /// Replace the whole collection with the seed snapshot.
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    /// All atoms in insertion order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Number of atoms stored.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Look up an atom by id.
    pub fn get(&self, id: &AtomId) -> Option<&Atom> {
        self.index.get(id).and_then(|&i| self.atoms.get(i))
    }

    /// First atom named `name`, optionally restricted to `atom_type`.
    pub fn find(&self, name: &str, atom_type: Option<&str>) -> Option<&Atom> {
        query::find_by_name_and_type(&self.atoms, name, atom_type)
    }

    /// All atoms of exactly `atom_type`.
    pub fn of_type(&self, atom_type: &str) -> Vec<&Atom> {
        query::atoms_of_type(&self.atoms, atom_type)
    }

    /// Link atoms referencing `id` in their outgoing set.
    pub fn incoming(&self, id: &AtomId) -> Vec<&Atom> {
        query::incoming_of(id, &self.atoms)
    }

    /// Resolved outgoing atoms of `atom`, skipping dangling ids.
    pub fn outgoing(&self, atom: &Atom) -> Vec<&Atom> {
        query::resolve_outgoing(atom, self)
    }

    /// Per-type counts in first-occurrence order.
    pub fn count_by_type(&self) -> Vec<(String, usize)> {
        query::count_by_type(&self.atoms)
    }

    /// Scheme-style display form, resolving children against this store.
    pub fn display_form(&self, atom: &Atom) -> String {
        query::to_display_form(atom, Some(self))
    }

    /// Node/link projection of the whole store.
    pub fn project(&self) -> GraphData {
        project_to_graph(&self.atoms)
    }
}

impl AtomLookup for AtomSpace {
    fn atom(&self, id: &AtomId) -> Option<&Atom> {
        self.get(id)
    }
}
