// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Line-oriented REPL loop.

use std::io::{self, BufRead, Write};

use atomspace_app_core::prefs::ReplPrefs;
use atomspace_repl::{execute, is_incomplete, ReplState};
use tracing::debug;

const QUIT: &str = ":quit";

/// Read expressions until `:quit` or EOF, echoing results to `out`.
///
/// Lines accumulate while the buffered expression still has open
/// parentheses, so one expression may span several lines.
pub(crate) fn run<R, W>(
    input: R,
    out: &mut W,
    state: &mut ReplState,
    prefs: &ReplPrefs,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buffer = String::new();
    prompt(out, &prefs.prompt)?;

    for line in input.lines() {
        let line = line?;
        if buffer.is_empty() {
            let trimmed = line.trim();
            if trimmed == QUIT {
                debug!("quit requested");
                return Ok(());
            }
            if trimmed.is_empty() {
                prompt(out, &prefs.prompt)?;
                continue;
            }
        } else {
            buffer.push('\n');
        }
        buffer.push_str(&line);

        if is_incomplete(&buffer) {
            prompt(out, &prefs.continuation_prompt)?;
            continue;
        }

        let before = state.generation();
        let result = execute(&buffer, state);
        buffer.clear();
        writeln!(out, "{}", result.output)?;
        if prefs.graph_summary && state.generation() != before {
            let graph = state.space().project();
            writeln!(out, "; {} nodes, {} links", graph.nodes.len(), graph.links.len())?;
        }
        prompt(out, &prefs.prompt)?;
    }

    // EOF: leave the terminal on a fresh line.
    writeln!(out)?;
    if !buffer.is_empty() {
        debug!("input ended inside an open expression");
        let result = execute(&buffer, state);
        writeln!(out, "{}", result.output)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}
