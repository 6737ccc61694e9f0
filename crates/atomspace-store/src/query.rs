// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only queries over atom sequences.
//!
//! Every function here is total: scans run in input order, missing atoms
//! yield empty results or `None`, and dangling outgoing ids are skipped.

use std::collections::HashMap;

use crate::atom::{Atom, AtomId};

/// Id-based lookup seam used when resolving outgoing sets.
pub trait AtomLookup {
    /// Fetch an atom by id. Returns `None` when absent.
    fn atom(&self, id: &AtomId) -> Option<&Atom>;
}

impl AtomLookup for HashMap<AtomId, Atom> {
    fn atom(&self, id: &AtomId) -> Option<&Atom> {
        self.get(id)
    }
}

/// Build an id-keyed map over `atoms`. Later duplicates overwrite earlier ones.
pub fn atoms_by_id(atoms: &[Atom]) -> HashMap<AtomId, Atom> {
    atoms.iter().map(|a| (a.id.clone(), a.clone())).collect()
}

/// Distinct type strings in first-occurrence order.
pub fn distinct_types(atoms: &[Atom]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for atom in atoms {
        if !seen.contains(&atom.atom_type.as_str()) {
            seen.push(&atom.atom_type);
        }
    }
    seen
}

/// Case-insensitive search over name/type combined with an exact type filter.
///
/// An empty `search` and no `type_filter` returns every atom in order.
pub fn filter<'a>(atoms: &'a [Atom], search: &str, type_filter: Option<&str>) -> Vec<&'a Atom> {
    let needle = search.to_lowercase();
    atoms
        .iter()
        .filter(|atom| {
            let matches_search = needle.is_empty()
                || atom.name.to_lowercase().contains(&needle)
                || atom.atom_type.to_lowercase().contains(&needle);
            let matches_type = type_filter.is_none_or(|t| atom.atom_type == t);
            matches_search && matches_type
        })
        .collect()
}

/// Per-type counts in first-occurrence order.
pub fn count_by_type(atoms: &[Atom]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for atom in atoms {
        match counts.iter_mut().find(|(t, _)| *t == atom.atom_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((atom.atom_type.clone(), 1)),
        }
    }
    counts
}

/// All atoms whose type is exactly `atom_type`.
pub fn atoms_of_type<'a>(atoms: &'a [Atom], atom_type: &str) -> Vec<&'a Atom> {
    atoms.iter().filter(|a| a.atom_type == atom_type).collect()
}

/// First atom named `name` (and typed `atom_type`, when given) in input order.
pub fn find_by_name_and_type<'a>(
    atoms: &'a [Atom],
    name: &str,
    atom_type: Option<&str>,
) -> Option<&'a Atom> {
    atoms
        .iter()
        .find(|a| a.name == name && atom_type.is_none_or(|t| a.atom_type == t))
}

/// Resolve an atom's outgoing ids, dropping any that the lookup cannot find.
pub fn resolve_outgoing<'a, L>(atom: &Atom, lookup: &'a L) -> Vec<&'a Atom>
where
    L: AtomLookup + ?Sized,
{
    atom.outgoing_ids()
        .iter()
        .filter_map(|id| lookup.atom(id))
        .collect()
}

/// Link-typed atoms whose outgoing set mentions `id`.
///
/// Only membership in the outgoing list matters; `id` need not exist.
pub fn incoming_of<'a>(id: &AtomId, atoms: &'a [Atom]) -> Vec<&'a Atom> {
    atoms
        .iter()
        .filter(|a| a.is_link() && a.outgoing_ids().contains(id))
        .collect()
}

/// Scheme-style rendering of an atom.
///
/// Relations with a non-empty outgoing set render one child per line; each
/// child is `(Type "name")` when `lookup` resolves it, otherwise its bare id.
pub fn to_display_form(atom: &Atom, lookup: Option<&dyn AtomLookup>) -> String {
    let outgoing = atom.outgoing_ids();
    if outgoing.is_empty() {
        return atom.simple_form();
    }
    let children: Vec<String> = outgoing
        .iter()
        .map(|id| {
            lookup
                .and_then(|l| l.atom(id))
                .map_or_else(|| id.to_string(), Atom::simple_form)
        })
        .collect();
    format!("({}\n  {})", atom.atom_type, children.join("\n  "))
}
