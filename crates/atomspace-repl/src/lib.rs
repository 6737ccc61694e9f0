// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scheme-style command interpreter over the in-memory AtomSpace.
//!
//! A raw line goes through three stages:
//!
//! 1. [`parse()`]: strip the outer parentheses and split the body into raw
//!    tokens (quote-aware, no nesting).
//! 2. [`Command::decode`]: map the command token onto the closed [`Command`]
//!    set, decoding `"name"` and `'Type` arguments once.
//! 3. [`execute()`]: run the handler against a caller-owned [`ReplState`] and
//!    fold any failure into a [`ReplResult`].
//!
//! # Failure Semantics
//!
//! Two tiers, both returned as values: [`SyntaxError`] for malformed lines and
//! [`CommandError`] for bad arguments, unknown commands and missing atoms. A
//! failed command never mutates state; handlers validate before they write.
//!
//! Not-found handling differs per command on purpose: `cog-incoming-set`,
//! `display` and `cog-tv` fail on an unknown name, while `cog-outgoing-set`
//! answers `()` and `cog-get-atoms` reports that no atoms matched.
#![forbid(unsafe_code)]

mod args;
mod command;
mod exec;
mod help;
mod parse;
mod state;

pub use args::{unquote_string, unquote_type};
pub use command::{Command, CommandError};
pub use exec::{execute, ReplResult};
pub use help::HELP_TEXT;
pub use parse::{is_balanced, is_incomplete, parse, ParsedCommand, SyntaxError};
pub use state::ReplState;
