// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command dispatch against a [`ReplState`].

use std::fmt::Display;

use atomspace_store::{Atom, AtomId, TruthValue};
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::command::{Command, CommandError};
use crate::help::HELP_TEXT;
use crate::parse::parse;
use crate::state::ReplState;

const CONCEPT_NODE: &str = "ConceptNode";
const PREDICATE_NODE: &str = "PredicateNode";
const INHERITANCE_LINK: &str = "InheritanceLink";

/// Outcome of one command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReplResult {
    /// `false` for syntax and semantic errors; state is then untouched.
    pub success: bool,
    /// Text for the scrollback.
    pub output: String,
    /// Atoms the command returned or touched.
    pub atoms: Option<Vec<Atom>>,
    /// Atom created by the command, if any.
    pub new_atom: Option<Atom>,
}

impl ReplResult {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            ..Self::default()
        }
    }

    fn with_atoms(mut self, atoms: Vec<Atom>) -> Self {
        self.atoms = Some(atoms);
        self
    }

    fn created(output: impl Into<String>, atom: Atom) -> Self {
        Self {
            new_atom: Some(atom),
            ..Self::ok(output)
        }
    }

    fn failure(err: &impl Display) -> Self {
        Self {
            success: false,
            output: err.to_string(),
            ..Self::default()
        }
    }
}

/// Run one raw line against `state`.
///
/// Errors never escape: syntax and semantic failures come back as a result
/// with `success == false` and the state unchanged.
#[instrument(level = "debug", skip(state))]
pub fn execute(input: &str, state: &mut ReplState) -> ReplResult {
    let parsed = match parse(input) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(?err, "syntax error");
            return ReplResult::failure(&err);
        }
    };
    let result = Command::decode(&parsed).and_then(|cmd| {
        debug!(command = cmd.name(), "dispatch");
        run(cmd, state)
    });
    result.unwrap_or_else(|err| {
        debug!(%err, "command failed");
        ReplResult::failure(&err)
    })
}

fn run(cmd: Command, state: &mut ReplState) -> Result<ReplResult, CommandError> {
    match cmd {
        Command::Help => Ok(ReplResult::ok(HELP_TEXT)),
        Command::CountAll => Ok(count_all(state)),
        Command::AtomSpaceHandle => Ok(atomspace_handle()),
        Command::GetAtoms { atom_type } => Ok(get_atoms(state, &atom_type)),
        Command::Concept { name } => node(state, CONCEPT_NODE, &name, TruthValue::CONCEPT_DEFAULT),
        Command::Predicate { name } => node(
            state,
            PREDICATE_NODE,
            &name,
            TruthValue::PREDICATE_DEFAULT,
        ),
        Command::Inheritance { source, target } => inheritance(state, &source, &target),
        Command::Clear => Ok(clear(state)),
        Command::IncomingSet { name } => incoming_set(state, &name),
        Command::OutgoingSet { name } => Ok(outgoing_set(state, &name)),
        Command::Display { name } => display(state, &name),
        Command::TruthValue { name } => truth_value(state, &name),
        Command::Unknown(token) => Err(CommandError::Unknown(token)),
    }
}

fn count_all(state: &ReplState) -> ReplResult {
    let breakdown: Vec<String> = state
        .space()
        .count_by_type()
        .iter()
        .map(|(t, n)| format!("  {t}: {n}"))
        .collect();
    ReplResult::ok(format!(
        "Total atoms: {}\n\nBy type:\n{}",
        state.atoms().len(),
        breakdown.join("\n")
    ))
}

// Cosmetic; the suffix is random on every call.
fn atomspace_handle() -> ReplResult {
    let addr: u32 = rand::thread_rng().gen_range(0..0xff_ffff);
    ReplResult::ok(format!("#<AtomSpace addr: 0x55d4{addr:06x}>"))
}

fn get_atoms(state: &ReplState, atom_type: &str) -> ReplResult {
    let atoms = state.space().of_type(atom_type);
    if atoms.is_empty() {
        return ReplResult::ok(format!("No atoms of type {atom_type} found."));
    }
    let lines: Vec<String> = atoms
        .iter()
        .map(|a| {
            if a.outgoing.is_some() {
                format!("({} ...)", a.atom_type)
            } else {
                a.simple_form()
            }
        })
        .collect();
    ReplResult::ok(lines.join("\n")).with_atoms(atoms.into_iter().cloned().collect())
}

fn node(
    state: &mut ReplState,
    atom_type: &str,
    name: &str,
    tv: TruthValue,
) -> Result<ReplResult, CommandError> {
    if let Some(existing) = state.space().find(name, Some(atom_type)) {
        return Ok(ReplResult::ok(existing.simple_form()).with_atoms(vec![existing.clone()]));
    }
    let atom = state.create(atom_type, name, tv, None)?;
    Ok(ReplResult::created(
        format!("Created: {}", atom.simple_form()),
        atom,
    ))
}

/// Endpoint lookup for inheritance: any type, else a new ConceptNode.
fn find_or_create_endpoint(state: &mut ReplState, name: &str) -> Result<Atom, CommandError> {
    match state.space().find(name, None) {
        Some(atom) => Ok(atom.clone()),
        None => state.create(CONCEPT_NODE, name, TruthValue::CONCEPT_DEFAULT, None),
    }
}

fn inheritance(
    state: &mut ReplState,
    source: &str,
    target: &str,
) -> Result<ReplResult, CommandError> {
    let link_name = format!("{source}->{target}");
    // Up to three atoms may be created; refuse before the first one.
    let missing = |name: &str| state.space().find(name, None).is_none();
    let needed = usize::from(missing(source))
        + usize::from(source != target && missing(target))
        + usize::from(state.space().find(&link_name, Some(INHERITANCE_LINK)).is_none());
    state.ensure_capacity(needed)?;

    let a = find_or_create_endpoint(state, source)?;
    let b = find_or_create_endpoint(state, target)?;
    let rendered = format!(
        "(InheritanceLink\n  {}\n  {})",
        a.simple_form(),
        b.simple_form()
    );

    if let Some(existing) = state.space().find(&link_name, Some(INHERITANCE_LINK)) {
        return Ok(ReplResult::ok(rendered).with_atoms(vec![existing.clone()]));
    }
    let link = state.create(
        INHERITANCE_LINK,
        &link_name,
        TruthValue::CONCEPT_DEFAULT,
        Some(vec![a.id, b.id]),
    )?;
    Ok(ReplResult::created(format!("Created: {rendered}"), link))
}

fn clear(state: &mut ReplState) -> ReplResult {
    state.reset();
    info!(atoms = state.atoms().len(), "atomspace reset to seed");
    ReplResult::ok("AtomSpace cleared and reset to sample data.").with_atoms(state.atoms().to_vec())
}

/// `(A)\n(B)` wrapped in one outer pair, or `()` when empty.
fn list_result(atoms: Vec<&Atom>) -> ReplResult {
    if atoms.is_empty() {
        return ReplResult::ok("()");
    }
    let lines: Vec<String> = atoms.iter().map(|a| a.simple_form()).collect();
    ReplResult::ok(format!("({})", lines.join("\n")))
        .with_atoms(atoms.into_iter().cloned().collect())
}

fn incoming_set(state: &ReplState, name: &str) -> Result<ReplResult, CommandError> {
    let atom = state
        .space()
        .find(name, None)
        .ok_or_else(|| CommandError::NotFound(name.to_owned()))?;
    // Any atom whose outgoing set mentions the id counts, whatever its type.
    let incoming: Vec<&Atom> = state
        .atoms()
        .iter()
        .filter(|a| a.outgoing_ids().contains(&atom.id))
        .collect();
    Ok(list_result(incoming))
}

fn outgoing_set(state: &ReplState, name: &str) -> ReplResult {
    let Some(link) = state.space().find(name, None) else {
        return ReplResult::ok("()");
    };
    if link.outgoing.is_none() {
        return ReplResult::ok("()");
    }
    let outgoing = state.space().outgoing(link);
    if outgoing.is_empty() {
        return ReplResult::ok("()").with_atoms(Vec::new());
    }
    list_result(outgoing)
}

fn display(state: &ReplState, name: &str) -> Result<ReplResult, CommandError> {
    let atom = state
        .space()
        .find(name, None)
        .ok_or_else(|| CommandError::NotFound(name.to_owned()))?;

    let mut output = atom.simple_form();
    if let Some(tv) = &atom.tv {
        output.push_str(&format!("\n  ; TV: {tv}"));
    }
    if let Some(outgoing) = &atom.outgoing {
        let names: Vec<String> = outgoing
            .iter()
            .map(|id| endpoint_label(state, id))
            .collect();
        output.push_str(&format!("\n  ; Outgoing: [{}]", names.join(", ")));
    }
    Ok(ReplResult::ok(output).with_atoms(vec![atom.clone()]))
}

/// Name of the referenced atom, or the bare id when unresolved or unnamed.
fn endpoint_label(state: &ReplState, id: &AtomId) -> String {
    state
        .space()
        .get(id)
        .map(|a| a.name.as_str())
        .filter(|n| !n.is_empty())
        .map_or_else(|| id.to_string(), str::to_owned)
}

fn truth_value(state: &ReplState, name: &str) -> Result<ReplResult, CommandError> {
    let atom = state
        .space()
        .find(name, None)
        .ok_or_else(|| CommandError::NotFound(name.to_owned()))?;
    let tv = atom.tv.unwrap_or(TruthValue::UNSET);
    Ok(ReplResult::ok(tv.to_string()))
}
