// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text returned by `(help)`.
//!
//! The last example shows the nested constructor form of OpenCog's shell.
//! The flat tokenizer does not accept it; `(Inheritance "Cat" "Animal")` is
//! the form that works here.

/// Usage text listing every command.
pub const HELP_TEXT: &str = r#"OpenCog Scheme REPL - Available Commands:

Atom Creation:
  (Concept "name")           Create/get ConceptNode
  (Predicate "name")         Create/get PredicateNode
  (Inheritance A B)          Create InheritanceLink

AtomSpace Queries:
  (cog-atomspace)            Get current atomspace info
  (cog-get-atoms 'Type)      List atoms by type
  (cog-incoming-set atom)    Get incoming links
  (cog-outgoing-set link)    Get outgoing atoms
  (cog-tv atom)              Get truth value

Utilities:
  (count-all)                Count all atoms
  (display atom)             Display atom representation
  (clear)                    Reset to sample data
  (help)                     Show this help message

Examples:
  (Concept "Cat")
  (cog-get-atoms 'ConceptNode)
  (Inheritance (Concept "Cat") (Concept "Animal"))"#;
