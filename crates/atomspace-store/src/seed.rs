// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sample taxonomy every fresh session starts from.

use crate::atom::{Atom, TruthValue};

/// Number of atoms in the seed snapshot.
pub const SEED_LEN: usize = 14;

/// The fixed seed: nine vertices and five inheritance edges, ids `"1"`..`"14"`.
pub fn seed_atoms() -> Vec<Atom> {
    let concept = |id: &str, name: &str| {
        Atom::node(id, "ConceptNode", name, Some(TruthValue::CONCEPT_DEFAULT))
    };
    let predicate = |id: &str, name: &str| {
        Atom::node(id, "PredicateNode", name, Some(TruthValue::PREDICATE_DEFAULT))
    };
    let inherits = |id: &str, name: &str, from: &str, to: &str| {
        Atom::link(id, "InheritanceLink", name, None, vec![from.into(), to.into()])
    };

    vec![
        concept("1", "Animal"),
        concept("2", "Mammal"),
        concept("3", "Cat"),
        concept("4", "Dog"),
        concept("5", "Human"),
        concept("6", "Socrates"),
        predicate("7", "is-a"),
        predicate("8", "eats"),
        concept("9", "Food"),
        inherits("10", "Mammal->Animal", "2", "1"),
        inherits("11", "Cat->Mammal", "3", "2"),
        inherits("12", "Dog->Mammal", "4", "2"),
        inherits("13", "Human->Mammal", "5", "2"),
        inherits("14", "Socrates->Human", "6", "5"),
    ]
}
