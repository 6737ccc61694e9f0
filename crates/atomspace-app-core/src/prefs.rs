// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interactive REPL preferences.

use serde::{Deserialize, Serialize};

/// Saved preferences for the interactive loop.
///
/// Missing fields fall back to their defaults, so older files keep loading
/// when new fields appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplPrefs {
    /// Prompt printed before each fresh expression.
    pub prompt: String,
    /// Prompt printed while an expression is still open.
    pub continuation_prompt: String,
    /// Print `N nodes, M links` after each mutating command.
    pub graph_summary: bool,
}

impl ReplPrefs {
    /// Config key the prefs are stored under.
    pub const KEY: &'static str = "repl";
}

impl Default for ReplPrefs {
    fn default() -> Self {
        Self {
            prompt: "scheme@(guile-user)> ".to_owned(),
            continuation_prompt: "... ".to_owned(),
            graph_summary: true,
        }
    }
}
