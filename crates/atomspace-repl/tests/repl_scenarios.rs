// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end command scenarios against a fresh session.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use atomspace_repl::{execute, ReplState};
use atomspace_store::{Atom, AtomId};

fn fresh() -> ReplState {
    let mut state = ReplState::new();
    assert!(execute("(clear)", &mut state).success);
    state
}

// ── parse tier ──────────────────────────────────────────────────────

#[test]
fn bare_word_is_a_syntax_error() {
    let mut state = fresh();
    let before = state.generation();
    let result = execute("help", &mut state);
    assert!(!result.success);
    assert!(result.output.contains("Syntax error"));
    assert_eq!(state.generation(), before);
}

#[test]
fn empty_parens_are_a_syntax_error() {
    let mut state = fresh();
    let result = execute("(   )", &mut state);
    assert!(!result.success);
    assert!(result.output.starts_with("Syntax error"));
}

#[test]
fn unknown_command_names_the_token() {
    let mut state = fresh();
    let result = execute("(cog-frobnicate)", &mut state);
    assert!(!result.success);
    assert_eq!(
        result.output,
        "Unknown command: cog-frobnicate\nType (help) for available commands."
    );
}

// ── informational commands ──────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let mut state = fresh();
    let result = execute("(help)", &mut state);
    assert!(result.success);
    assert!(result.output.contains("Available Commands"));
    assert!(result.output.contains("cog-get-atoms"));
}

#[test]
fn count_all_breaks_down_by_type() {
    let mut state = fresh();
    let result = execute("(count-all)", &mut state);
    assert!(result.success);
    assert_eq!(
        result.output,
        "Total atoms: 14\n\nBy type:\n  ConceptNode: 7\n  PredicateNode: 2\n  InheritanceLink: 5"
    );
}

#[test]
fn atomspace_handle_has_random_hex_suffix() {
    let mut state = fresh();
    let result = execute("(cog-atomspace)", &mut state);
    assert!(result.success);
    let hex = result
        .output
        .strip_prefix("#<AtomSpace addr: 0x55d4")
        .and_then(|rest| rest.strip_suffix('>'))
        .expect("handle shape");
    assert_eq!(hex.len(), 6);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
}

// ── cog-get-atoms ───────────────────────────────────────────────────

#[test]
fn get_atoms_lists_nodes_and_elides_links() {
    let mut state = fresh();
    let preds = execute("(cog-get-atoms 'PredicateNode)", &mut state);
    assert!(preds.success);
    assert_eq!(preds.output, "(PredicateNode \"is-a\")\n(PredicateNode \"eats\")");
    assert_eq!(preds.atoms.map(|a| a.len()), Some(2));

    let links = execute("(cog-get-atoms 'InheritanceLink)", &mut state);
    assert_eq!(links.output.lines().count(), 5);
    assert!(links.output.lines().all(|l| l == "(InheritanceLink ...)"));
}

#[test]
fn get_atoms_unknown_type_is_not_a_failure() {
    let mut state = fresh();
    let result = execute("(cog-get-atoms 'NonexistentType)", &mut state);
    assert!(result.success);
    assert_eq!(result.output, "No atoms of type NonexistentType found.");
    assert!(result.atoms.is_none());
}

#[test]
fn get_atoms_argument_errors() {
    let mut state = fresh();
    let missing = execute("(cog-get-atoms)", &mut state);
    assert!(!missing.success);
    assert!(missing.output.contains("Usage"));

    let bare = execute("(cog-get-atoms ConceptNode)", &mut state);
    assert!(!bare.success);
    assert_eq!(
        bare.output,
        "Invalid type syntax. Use quoted type like 'ConceptNode"
    );
}

// ── node constructors ───────────────────────────────────────────────

#[test]
fn concept_returns_existing_seed_atom() {
    let mut state = fresh();
    let result = execute("(Concept \"Cat\")", &mut state);
    assert!(result.success);
    assert_eq!(result.output, "(ConceptNode \"Cat\")");
    assert!(result.new_atom.is_none());
    assert_eq!(result.atoms.unwrap()[0].id.as_str(), "3");
    assert_eq!(state.atoms().len(), 14);
}

#[test]
fn concept_creates_new_atom() {
    let mut state = fresh();
    let result = execute("(Concept \"Zebra\")", &mut state);
    assert!(result.success);
    assert_eq!(result.output, "Created: (ConceptNode \"Zebra\")");
    let atom = result.new_atom.unwrap();
    assert_eq!(atom.id.as_str(), "15");
    assert_eq!(atom.tv.map(|tv| tv.to_string()).as_deref(), Some("(stv 1.000 0.900)"));
    assert_eq!(state.atoms().len(), 15);
    assert_eq!(state.next_id(), 16);
}

#[test]
fn concept_lookup_is_type_specific() {
    let mut state = fresh();
    // "is-a" exists only as a PredicateNode.
    let result = execute("(ConceptNode \"is-a\")", &mut state);
    assert!(result.output.starts_with("Created: "));
    assert_eq!(state.atoms().len(), 15);
}

#[test]
fn predicate_defaults_to_full_confidence() {
    let mut state = fresh();
    let existing = execute("(Predicate \"is-a\")", &mut state);
    assert_eq!(existing.output, "(PredicateNode \"is-a\")");

    let created = execute("(Predicate \"likes\")", &mut state);
    assert_eq!(created.output, "Created: (PredicateNode \"likes\")");
    let atom = created.new_atom.unwrap();
    assert_eq!(atom.atom_type, "PredicateNode");
    let tv = execute("(cog-tv \"likes\")", &mut state);
    assert_eq!(tv.output, "(stv 1.000 1.000)");
}

#[test]
fn constructor_argument_errors_leave_state_alone() {
    let mut state = fresh();
    for line in [
        "(Concept)",
        "(Concept Cat)",
        "(Concept \"\")",
        "(Predicate)",
        "(Predicate 'x)",
        "(Inheritance \"A\")",
        "(Inheritance A B)",
    ] {
        let result = execute(line, &mut state);
        assert!(!result.success, "{line} should fail");
        assert_eq!(state.atoms().len(), 14, "{line} mutated state");
        assert_eq!(state.next_id(), 15);
    }
    assert_eq!(
        execute("(Predicate 'x)", &mut state).output,
        "Name must be a quoted string, e.g., \"is-a\""
    );
}

// ── inheritance ─────────────────────────────────────────────────────

#[test]
fn inheritance_between_existing_atoms() {
    let mut state = fresh();
    let result = execute("(Inheritance \"Cat\" \"Animal\")", &mut state);
    assert!(result.success);
    assert_eq!(
        result.output,
        "Created: (InheritanceLink\n  (ConceptNode \"Cat\")\n  (ConceptNode \"Animal\"))"
    );
    let link = result.new_atom.unwrap();
    assert_eq!(link.name, "Cat->Animal");
    assert_eq!(link.outgoing_ids(), &[AtomId::from("3"), AtomId::from("1")]);

    let again = execute("(InheritanceLink \"Cat\" \"Animal\")", &mut state);
    assert!(again.new_atom.is_none());
    assert!(!again.output.starts_with("Created"));
    assert_eq!(again.atoms.unwrap()[0].id, link.id);
}

#[test]
fn inheritance_creates_missing_endpoints_in_order() {
    let mut state = fresh();
    let result = execute("(Inheritance \"Kitten\" \"Cub\")", &mut state);
    assert!(result.success);
    let kitten = state.space().find("Kitten", Some("ConceptNode")).unwrap().clone();
    let cub = state.space().find("Cub", Some("ConceptNode")).unwrap().clone();
    assert_eq!(kitten.id.as_str(), "15");
    assert_eq!(cub.id.as_str(), "16");
    let link = result.new_atom.unwrap();
    assert_eq!(link.id.as_str(), "17");
    assert_eq!(link.outgoing_ids(), &[kitten.id, cub.id]);
    assert_eq!(state.next_id(), 18);
}

#[test]
fn inheritance_endpoints_match_any_type() {
    let mut state = fresh();
    let result = execute("(Inheritance \"Socrates\" \"is-a\")", &mut state);
    assert!(result.output.contains("(PredicateNode \"is-a\")"));
    assert_eq!(state.atoms().len(), 15);
}

#[test]
fn nested_inheritance_syntax_is_rejected() {
    let mut state = fresh();
    let result = execute("(Inheritance (Concept \"Cat\") (Concept \"Animal\"))", &mut state);
    assert!(!result.success);
    assert_eq!(result.output, "Both arguments must be quoted atom names");
}

// ── clear ───────────────────────────────────────────────────────────

#[test]
fn clear_restores_seed_and_counter() {
    let mut state = fresh();
    execute("(Concept \"A\")", &mut state);
    execute("(Inheritance \"B\" \"C\")", &mut state);
    assert_eq!(state.atoms().len(), 18);

    let result = execute("(clear)", &mut state);
    assert!(result.success);
    assert_eq!(result.output, "AtomSpace cleared and reset to sample data.");
    assert_eq!(result.atoms.map(|a| a.len()), Some(14));
    assert_eq!(state.atoms().len(), 14);
    assert_eq!(state.next_id(), 15);
}

// ── incoming / outgoing ─────────────────────────────────────────────

#[test]
fn incoming_set_of_animal() {
    let mut state = fresh();
    let result = execute("(cog-incoming-set \"Animal\")", &mut state);
    assert!(result.success);
    assert_eq!(result.output, "((InheritanceLink \"Mammal->Animal\"))");
    assert_eq!(result.atoms.unwrap().len(), 1);
}

#[test]
fn incoming_set_of_mammal_lists_every_child_link() {
    let mut state = fresh();
    let result = execute("(cog-incoming-set \"Mammal\")", &mut state);
    assert_eq!(result.atoms.unwrap().len(), 4);
}

#[test]
fn incoming_set_empty_and_missing() {
    let mut state = fresh();
    let food = execute("(cog-incoming-set \"Food\")", &mut state);
    assert!(food.success);
    assert_eq!(food.output, "()");

    let missing = execute("(cog-incoming-set \"Unicorn\")", &mut state);
    assert!(!missing.success);
    assert_eq!(missing.output, "Atom \"Unicorn\" not found");
}

#[test]
fn outgoing_set_of_link() {
    let mut state = fresh();
    let result = execute("(cog-outgoing-set \"Cat->Mammal\")", &mut state);
    assert!(result.success);
    assert_eq!(
        result.output,
        "((ConceptNode \"Cat\")\n(ConceptNode \"Mammal\"))"
    );
    assert_eq!(result.atoms.unwrap().len(), 2);
}

#[test]
fn outgoing_set_is_lenient_about_missing_names() {
    let mut state = fresh();
    let node = execute("(cog-outgoing-set \"Cat\")", &mut state);
    assert!(node.success);
    assert_eq!(node.output, "()");

    let missing = execute("(cog-outgoing-set \"Unicorn\")", &mut state);
    assert!(missing.success);
    assert_eq!(missing.output, "()");

    let bad = execute("(cog-outgoing-set)", &mut state);
    assert!(!bad.success);
    assert!(bad.output.starts_with("Usage"));
}

// ── display / cog-tv ────────────────────────────────────────────────

#[test]
fn display_node_with_tv() {
    let mut state = fresh();
    let result = execute("(display \"Cat\")", &mut state);
    assert!(result.success);
    assert_eq!(result.output, "(ConceptNode \"Cat\")\n  ; TV: (stv 1.000 0.900)");
}

#[test]
fn display_link_lists_outgoing_names() {
    let mut state = fresh();
    let result = execute("(display \"Socrates->Human\")", &mut state);
    assert_eq!(
        result.output,
        "(InheritanceLink \"Socrates->Human\")\n  ; Outgoing: [Socrates, Human]"
    );
}

#[test]
fn display_and_tv_fail_on_missing_atom() {
    let mut state = fresh();
    for line in ["(display \"Nope\")", "(cog-tv \"Nope\")"] {
        let result = execute(line, &mut state);
        assert!(!result.success);
        assert!(result.output.contains("not found"));
    }
}

#[test]
fn cog_tv_defaults_when_unset() {
    let mut state = fresh();
    let concept = execute("(cog-tv \"Dog\")", &mut state);
    assert_eq!(concept.output, "(stv 1.000 0.900)");
    // Seed links carry no truth value.
    let link = execute("(cog-tv \"Dog->Mammal\")", &mut state);
    assert!(link.success);
    assert_eq!(link.output, "(stv 1.000 0.000)");
}

// ── sessions ────────────────────────────────────────────────────────

#[test]
fn state_accumulates_across_commands() {
    let mut state = fresh();
    execute("(Concept \"TestConcept\")", &mut state);
    execute("(Concept \"TestConcept2\")", &mut state);
    let listing = execute("(cog-get-atoms 'ConceptNode)", &mut state);
    assert!(listing.output.contains("TestConcept"));
    assert!(listing.output.contains("TestConcept2"));
    assert_eq!(state.next_id(), 17);
}

#[test]
fn sessions_are_independent() {
    let mut a = ReplState::new();
    let b = ReplState::new();
    execute("(Concept \"OnlyInA\")", &mut a);
    assert_eq!(a.atoms().len(), 15);
    assert_eq!(b.atoms().len(), 14);
}

#[test]
fn generation_tracks_mutations_only() {
    let mut state = ReplState::new();
    execute("(Concept \"Cat\")", &mut state);
    execute("(count-all)", &mut state);
    execute("(display \"Nope\")", &mut state);
    assert_eq!(state.generation(), 0);
    execute("(Concept \"New\")", &mut state);
    assert_eq!(state.generation(), 1);
    execute("(clear)", &mut state);
    assert_eq!(state.generation(), 2);
}

// ── id counter exhaustion ───────────────────────────────────────────

fn near_exhausted(top: u64) -> ReplState {
    ReplState::from_snapshot(vec![
        Atom::node(top.to_string().as_str(), "ConceptNode", "Top", None),
        Atom::node("1", "ConceptNode", "Cat", None),
    ])
}

#[test]
fn create_fails_cleanly_when_ids_run_out() {
    let mut state = near_exhausted(u64::MAX);
    let result = execute("(Concept \"Zebra\")", &mut state);
    assert!(!result.success);
    assert_eq!(result.output, "Cannot create atom: id counter exhausted");
    assert_eq!(state.atoms().len(), 2);
    assert_eq!(state.generation(), 0);

    // Lookups still work on an exhausted counter.
    let result = execute("(Concept \"Cat\")", &mut state);
    assert!(result.success);
    assert_eq!(result.output, "(ConceptNode \"Cat\")");
}

#[test]
fn inheritance_creates_nothing_unless_all_ids_fit() {
    // One id left (`u64::MAX - 1`); the link needs two endpoints plus itself.
    let mut state = near_exhausted(u64::MAX - 2);
    assert_eq!(state.next_id(), u64::MAX - 1);
    let result = execute("(Inheritance \"Zebra\" \"Horse\")", &mut state);
    assert!(!result.success);
    assert_eq!(state.atoms().len(), 2);
    assert_eq!(state.next_id(), u64::MAX - 1);

    // Both endpoints exist, so only the link needs an id.
    let result = execute("(Inheritance \"Cat\" \"Top\")", &mut state);
    assert!(result.success, "{}", result.output);
    let link = result.new_atom.unwrap();
    assert_eq!(link.id, AtomId::from(u64::MAX - 1));
    assert_eq!(link.outgoing_ids(), &[AtomId::from("1"), AtomId::from(u64::MAX - 2)]);
}
