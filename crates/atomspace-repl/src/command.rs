// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed command set.
//!
//! A [`ParsedCommand`] is decoded exactly once into a [`Command`]; handlers
//! only ever see validated names and types.

use thiserror::Error;

use crate::args::{unquote_string, unquote_type};
use crate::parse::ParsedCommand;

/// Semantic failures. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Required argument missing.
    #[error("Usage: {0}")]
    Usage(&'static str),
    /// Type argument not in `'Type` form.
    #[error("Invalid type syntax. Use quoted type like 'ConceptNode")]
    InvalidType,
    /// Node constructor argument not a quoted, non-empty string.
    #[error("Name must be a quoted string, e.g., \"{0}\"")]
    NameNotQuoted(&'static str),
    /// One of the two inheritance arguments not a quoted, non-empty string.
    #[error("Both arguments must be quoted atom names")]
    LinkArgsNotQuoted,
    /// Lookup argument not a quoted, non-empty string; names the expected kind.
    #[error("Provide a quoted {0} name")]
    NotQuoted(&'static str),
    /// No atom carries the given name.
    #[error("Atom \"{0}\" not found")]
    NotFound(String),
    /// No free id is left above the counter.
    #[error("Cannot create atom: id counter exhausted")]
    IdsExhausted,
    /// Command name outside the supported set.
    #[error("Unknown command: {0}\nType (help) for available commands.")]
    Unknown(String),
}

/// The supported commands with their decoded arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `(help)`
    Help,
    /// `(count-all)`
    CountAll,
    /// `(cog-atomspace)`
    AtomSpaceHandle,
    /// `(cog-get-atoms 'Type)`
    GetAtoms {
        /// Requested type.
        atom_type: String,
    },
    /// `(Concept "name")` / `(ConceptNode "name")`
    Concept {
        /// Node name.
        name: String,
    },
    /// `(Predicate "name")` / `(PredicateNode "name")`
    Predicate {
        /// Node name.
        name: String,
    },
    /// `(Inheritance "A" "B")` / `(InheritanceLink "A" "B")`
    Inheritance {
        /// Child name.
        source: String,
        /// Parent name.
        target: String,
    },
    /// `(clear)`
    Clear,
    /// `(cog-incoming-set "name")`
    IncomingSet {
        /// Atom name.
        name: String,
    },
    /// `(cog-outgoing-set "name")`
    OutgoingSet {
        /// Atom name.
        name: String,
    },
    /// `(display "name")`
    Display {
        /// Atom name.
        name: String,
    },
    /// `(cog-tv "name")`
    TruthValue {
        /// Atom name.
        name: String,
    },
    /// Anything else; carries the offending command token.
    Unknown(String),
}

const USAGE_GET_ATOMS: &str = "(cog-get-atoms 'TypeName)";
const USAGE_CONCEPT: &str = "(Concept \"name\")";
const USAGE_PREDICATE: &str = "(Predicate \"name\")";
const USAGE_INHERITANCE: &str =
    "(Inheritance (Concept \"A\") (Concept \"B\"))\nSimplified: Provide two concept names";
const USAGE_INCOMING: &str = "(cog-incoming-set (Concept \"name\"))";
const USAGE_OUTGOING: &str = "(cog-outgoing-set (Link \"name\"))";
const USAGE_DISPLAY: &str = "(display (Concept \"name\"))";
const USAGE_TV: &str = "(cog-tv (Concept \"name\"))";

/// Decode a non-empty quoted name; `""` counts as missing.
fn quoted_name(token: &str) -> Option<String> {
    unquote_string(token)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn name_arg(
    args: &[String],
    usage: &'static str,
    invalid: CommandError,
) -> Result<String, CommandError> {
    let first = args.first().ok_or(CommandError::Usage(usage))?;
    quoted_name(first).ok_or(invalid)
}

impl Command {
    /// Decode a tokenized line. Extra trailing arguments are ignored.
    pub fn decode(parsed: &ParsedCommand) -> Result<Self, CommandError> {
        let args = parsed.args.as_slice();
        let cmd = match parsed.command.as_str() {
            "help" => Self::Help,
            "count-all" => Self::CountAll,
            "cog-atomspace" => Self::AtomSpaceHandle,
            "cog-get-atoms" => {
                let first = args.first().ok_or(CommandError::Usage(USAGE_GET_ATOMS))?;
                let atom_type = unquote_type(first).ok_or(CommandError::InvalidType)?;
                Self::GetAtoms {
                    atom_type: atom_type.to_owned(),
                }
            }
            "Concept" | "ConceptNode" => Self::Concept {
                name: name_arg(args, USAGE_CONCEPT, CommandError::NameNotQuoted("Cat"))?,
            },
            "Predicate" | "PredicateNode" => Self::Predicate {
                name: name_arg(args, USAGE_PREDICATE, CommandError::NameNotQuoted("is-a"))?,
            },
            "Inheritance" | "InheritanceLink" => {
                let [a, b, ..] = args else {
                    return Err(CommandError::Usage(USAGE_INHERITANCE));
                };
                match (quoted_name(a), quoted_name(b)) {
                    (Some(source), Some(target)) => Self::Inheritance { source, target },
                    _ => return Err(CommandError::LinkArgsNotQuoted),
                }
            }
            "clear" => Self::Clear,
            "cog-incoming-set" => Self::IncomingSet {
                name: name_arg(args, USAGE_INCOMING, CommandError::NotQuoted("atom"))?,
            },
            "cog-outgoing-set" => Self::OutgoingSet {
                name: name_arg(args, USAGE_OUTGOING, CommandError::NotQuoted("link"))?,
            },
            "display" => Self::Display {
                name: name_arg(args, USAGE_DISPLAY, CommandError::NotQuoted("atom"))?,
            },
            "cog-tv" => Self::TruthValue {
                name: name_arg(args, USAGE_TV, CommandError::NotQuoted("atom"))?,
            },
            other => Self::Unknown(other.to_owned()),
        };
        Ok(cmd)
    }

    /// Canonical command token, for logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Help => "help",
            Self::CountAll => "count-all",
            Self::AtomSpaceHandle => "cog-atomspace",
            Self::GetAtoms { .. } => "cog-get-atoms",
            Self::Concept { .. } => "Concept",
            Self::Predicate { .. } => "Predicate",
            Self::Inheritance { .. } => "Inheritance",
            Self::Clear => "clear",
            Self::IncomingSet { .. } => "cog-incoming-set",
            Self::OutgoingSet { .. } => "cog-outgoing-set",
            Self::Display { .. } => "display",
            Self::TruthValue { .. } => "cog-tv",
            Self::Unknown(token) => token,
        }
    }
}
