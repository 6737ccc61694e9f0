// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Atom data model: identifiers, truth values and the Node/Link classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of an atom within one store.
///
/// Ids minted by the interpreter are the decimal rendering of a monotonic
/// counter, but snapshots from elsewhere may carry any string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomId(pub String);

impl AtomId {
    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, when it is a plain decimal counter value.
    pub fn as_counter(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for AtomId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for AtomId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for AtomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Simple truth value `(stv strength confidence)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruthValue {
    /// Strength in `[0, 1]`.
    pub strength: f64,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Rejection reasons for externally supplied truth values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TruthValueError {
    /// Strength outside `[0, 1]` (or not a finite number).
    #[error("strength {0} is outside [0, 1]")]
    Strength(f64),
    /// Confidence outside `[0, 1]` (or not a finite number).
    #[error("confidence {0} is outside [0, 1]")]
    Confidence(f64),
}

impl TruthValue {
    /// Default truth value for concept nodes and inheritance links.
    pub const CONCEPT_DEFAULT: Self = Self::new(1.0, 0.9);
    /// Default truth value for predicate nodes.
    pub const PREDICATE_DEFAULT: Self = Self::new(1.0, 1.0);
    /// Value reported by `cog-tv` for atoms that carry no truth value.
    pub const UNSET: Self = Self::new(1.0, 0.0);

    /// Build a truth value without range checks.
    pub const fn new(strength: f64, confidence: f64) -> Self {
        Self {
            strength,
            confidence,
        }
    }

    /// Build a truth value from external input, rejecting out-of-range components.
    pub fn checked(strength: f64, confidence: f64) -> Result<Self, TruthValueError> {
        if !in_unit_interval(strength) {
            return Err(TruthValueError::Strength(strength));
        }
        if !in_unit_interval(confidence) {
            return Err(TruthValueError::Confidence(confidence));
        }
        Ok(Self::new(strength, confidence))
    }

    /// Returns `true` when both components lie in `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        in_unit_interval(self.strength) && in_unit_interval(self.confidence)
    }
}

/// Renders as `(stv S C)` with three decimals per component.
impl std::fmt::Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(stv {:.3} {:.3})", self.strength, self.confidence)
    }
}

fn in_unit_interval(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Structural class of an atom type, derived from its name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomClass {
    /// Zero-arity vertex (`…Node`).
    Node,
    /// Relation over an outgoing set (`…Link`).
    Link,
}

/// Classify a type string by suffix. Types with neither suffix are unclassified.
pub fn classify(atom_type: &str) -> Option<AtomClass> {
    if atom_type.ends_with("Link") {
        Some(AtomClass::Link)
    } else if atom_type.ends_with("Node") {
        Some(AtomClass::Node)
    } else {
        None
    }
}

/// Returns `true` if the type names a link (`…Link`).
pub fn is_link_type(atom_type: &str) -> bool {
    classify(atom_type) == Some(AtomClass::Link)
}

/// Returns `true` if the type names a node (`…Node`).
pub fn is_node_type(atom_type: &str) -> bool {
    classify(atom_type) == Some(AtomClass::Node)
}

/// A typed graph element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Store-unique identifier.
    pub id: AtomId,
    /// Type tag, e.g. `ConceptNode` or `InheritanceLink`.
    #[serde(rename = "type")]
    pub atom_type: String,
    /// Display label; not unique.
    pub name: String,
    /// Optional truth value. Absent is distinct from any explicit value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv: Option<TruthValue>,
    /// Ordered endpoints for relation atoms. Ids may dangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<Vec<AtomId>>,
}

impl Atom {
    /// Build a node-style atom (no outgoing set).
    pub fn node(
        id: impl Into<AtomId>,
        atom_type: impl Into<String>,
        name: impl Into<String>,
        tv: Option<TruthValue>,
    ) -> Self {
        Self {
            id: id.into(),
            atom_type: atom_type.into(),
            name: name.into(),
            tv,
            outgoing: None,
        }
    }

    /// Build a relation atom over `outgoing`.
    pub fn link(
        id: impl Into<AtomId>,
        atom_type: impl Into<String>,
        name: impl Into<String>,
        tv: Option<TruthValue>,
        outgoing: Vec<AtomId>,
    ) -> Self {
        Self {
            id: id.into(),
            atom_type: atom_type.into(),
            name: name.into(),
            tv,
            outgoing: Some(outgoing),
        }
    }

    /// Structural class of this atom's type.
    pub fn class(&self) -> Option<AtomClass> {
        classify(&self.atom_type)
    }

    /// Returns `true` if this atom's type is a link type.
    pub fn is_link(&self) -> bool {
        is_link_type(&self.atom_type)
    }

    /// Outgoing ids, empty for atoms without an outgoing set.
    pub fn outgoing_ids(&self) -> &[AtomId] {
        self.outgoing.as_deref().unwrap_or_default()
    }

    /// Short form `(Type "name")`.
    pub fn simple_form(&self) -> String {
        format!("({} \"{}\")", self.atom_type, self.name)
    }
}
