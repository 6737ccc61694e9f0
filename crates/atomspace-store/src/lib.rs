// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory AtomSpace hypergraph.
//!
//! An [`Atom`] is either a vertex-like node or an edge-like link, told apart
//! purely by the suffix of its type string. Links reference other atoms through
//! an ordered outgoing set of ids which may dangle. [`AtomSpace`] owns a
//! collection of atoms in insertion order; the free functions in [`query`] and
//! [`graph`] work on any atom slice.
//!
//! # Absence Semantics
//!
//! Nothing in this crate fails on a missing atom. Lookups return `None`,
//! scans return empty vectors and unresolvable outgoing ids are skipped (or
//! rendered as the bare id in display forms). The only error type is
//! [`TruthValueError`], produced by the validating [`TruthValue::checked`].
#![forbid(unsafe_code)]

mod atom;
pub mod graph;
pub mod query;
mod seed;
mod space;

pub use atom::{
    classify, is_link_type, is_node_type, Atom, AtomClass, AtomId, TruthValue, TruthValueError,
};
pub use graph::{project_to_graph, type_color, GraphData, GraphLink, GraphNode};
pub use query::AtomLookup;
pub use seed::{seed_atoms, SEED_LEN};
pub use space::AtomSpace;
