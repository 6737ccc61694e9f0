// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Session state: the atom collection plus the id counter.

use atomspace_store::{Atom, AtomId, AtomSpace, TruthValue, SEED_LEN};

use crate::command::CommandError;

const SEED_NEXT_ID: u64 = SEED_LEN as u64 + 1;

/// Mutable state owned by one interpreter session.
///
/// Never shared between sessions; callers that need concurrency keep one
/// state per session.
#[derive(Debug, Clone)]
pub struct ReplState {
    space: AtomSpace,
    next_id: u64,
    generation: u64,
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplState {
    /// Fresh session over the seed snapshot; the next id is `15`.
    pub fn new() -> Self {
        Self {
            space: AtomSpace::seeded(),
            next_id: SEED_NEXT_ID,
            generation: 0,
        }
    }

    /// Session over an externally supplied snapshot.
    ///
    /// Minting resumes after the largest numeric id present (or at `1`).
    /// `(clear)` still returns to the seed.
    pub fn from_snapshot(atoms: Vec<Atom>) -> Self {
        let next_id = atoms
            .iter()
            .filter_map(|a| a.id.as_counter())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            space: AtomSpace::from_atoms(atoms),
            next_id,
            generation: 0,
        }
    }

    /// The atom collection.
    pub fn space(&self) -> &AtomSpace {
        &self.space
    }

    /// All atoms in insertion order.
    pub fn atoms(&self) -> &[Atom] {
        self.space.atoms()
    }

    /// Id the next created atom will receive (unless already taken).
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Bumped on every mutation; front ends re-project when it changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mint an id, append the atom and return a copy of it.
    ///
    /// Fails without touching state once the counter cannot advance.
    pub(crate) fn create(
        &mut self,
        atom_type: &str,
        name: &str,
        tv: TruthValue,
        outgoing: Option<Vec<AtomId>>,
    ) -> Result<Atom, CommandError> {
        let (id, after) = self
            .next_free(self.next_id)
            .ok_or(CommandError::IdsExhausted)?;
        let atom = Atom {
            id,
            atom_type: atom_type.to_owned(),
            name: name.to_owned(),
            tv: Some(tv),
            outgoing,
        };
        self.next_id = after;
        self.space.insert(atom.clone());
        self.generation += 1;
        Ok(atom)
    }

    /// Check that `count` more atoms can be created.
    pub(crate) fn ensure_capacity(&self, count: usize) -> Result<(), CommandError> {
        let mut counter = self.next_id;
        for _ in 0..count {
            let (_, after) = self
                .next_free(counter)
                .ok_or(CommandError::IdsExhausted)?;
            counter = after;
        }
        Ok(())
    }

    /// Restore the seed and its id counter.
    pub(crate) fn reset(&mut self) {
        self.space.reset();
        self.next_id = SEED_NEXT_ID;
        self.generation += 1;
    }

    // First free id at or after `counter`, with the counter value after it.
    // Skips ids a snapshot may already occupy so `insert` cannot refuse.
    fn next_free(&self, mut counter: u64) -> Option<(AtomId, u64)> {
        loop {
            let after = counter.checked_add(1)?;
            let id = AtomId::from(counter);
            if self.space.get(&id).is_none() {
                return Some((id, after));
            }
            counter = after;
        }
    }
}
