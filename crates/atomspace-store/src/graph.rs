// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Renderable node/link projection for graph viewers.

use serde::{Deserialize, Serialize};

use crate::atom::{Atom, AtomId};
use crate::query::distinct_types;

/// Size hint every projected vertex carries.
pub const NODE_VAL: u32 = 10;

/// Fallback color for atom types without an assigned one.
pub const DEFAULT_COLOR: &str = "#888888";

/// Projected vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Atom id.
    pub id: AtomId,
    /// Index of the atom's type among the distinct types of the input.
    pub group: usize,
    /// Size hint.
    pub val: u32,
    /// Atom name.
    pub name: String,
    /// Atom type.
    #[serde(rename = "type")]
    pub atom_type: String,
    /// Display color, see [`type_color`].
    pub color: String,
}

/// Projected binary edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    /// First outgoing id.
    pub source: AtomId,
    /// Second outgoing id.
    pub target: AtomId,
    /// Link type.
    #[serde(rename = "type")]
    pub atom_type: String,
}

/// Node/link projection of an atom sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphData {
    /// All non-link atoms.
    pub nodes: Vec<GraphNode>,
    /// Link atoms with at least two outgoing ids.
    pub links: Vec<GraphLink>,
}

/// Project atoms to vertices and binary edges.
///
/// Every non-link atom (unclassified types included) becomes a vertex. Links
/// need two or more outgoing ids and only the first two are used, so higher
/// arities collapse to a single edge.
pub fn project_to_graph(atoms: &[Atom]) -> GraphData {
    let types = distinct_types(atoms);
    let group_of = |t: &str| types.iter().position(|x| *x == t).unwrap_or_default();

    let nodes = atoms
        .iter()
        .filter(|a| !a.is_link())
        .map(|a| GraphNode {
            id: a.id.clone(),
            group: group_of(&a.atom_type),
            val: NODE_VAL,
            name: a.name.clone(),
            atom_type: a.atom_type.clone(),
            color: type_color(&a.atom_type).to_owned(),
        })
        .collect();

    let links = atoms
        .iter()
        .filter(|a| a.is_link())
        .filter_map(|a| match a.outgoing_ids() {
            [source, target, ..] => Some(GraphLink {
                source: source.clone(),
                target: target.clone(),
                atom_type: a.atom_type.clone(),
            }),
            _ => None,
        })
        .collect();

    GraphData { nodes, links }
}

/// Viewer color for an atom type.
pub fn type_color(atom_type: &str) -> &'static str {
    match atom_type {
        "ConceptNode" => "#00f0ff",
        "PredicateNode" => "#bd00ff",
        "InheritanceLink" => "#00ff88",
        "EvaluationLink" => "#ffaa00",
        "ListLink" => "#ff6b6b",
        "MemberLink" => "#ff8800",
        "SimilarityLink" => "#00ff00",
        "SetLink" => "#ffff00",
        "VariableNode" => "#ff00ff",
        "NumberNode" => "#00ffff",
        _ => DEFAULT_COLOR,
    }
}
