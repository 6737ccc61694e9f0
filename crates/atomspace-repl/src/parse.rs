// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flat tokenizer for parenthesized command lines.
//!
//! The outer parenthesis pair is stripped and the body is split on
//! whitespace outside double-quoted regions. Nested expressions are not
//! parsed; `(Concept "A")` inside an argument position stays a pair of opaque
//! tokens.

use thiserror::Error;

/// Input that is not a parenthesized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Missing the leading `(` or trailing `)`.
    #[error("Syntax error: Invalid Scheme expression. Commands must be in parentheses, e.g., (help)")]
    NotParenthesized,
    /// Nothing but whitespace between the parentheses.
    #[error("Syntax error: Invalid Scheme expression. Commands must be in parentheses, e.g., (help)")]
    EmptyBody,
}

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token.
    pub command: String,
    /// Remaining tokens, verbatim (quotes and apostrophes included).
    pub args: Vec<String>,
    /// Trimmed input.
    pub raw: String,
}

/// Tokenize `input` into a command name and raw argument tokens.
pub fn parse(input: &str) -> Result<ParsedCommand, SyntaxError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(SyntaxError::NotParenthesized)?
        .trim();

    let mut tokens = tokenize(body).into_iter();
    let command = tokens.next().ok_or(SyntaxError::EmptyBody)?;
    Ok(ParsedCommand {
        command,
        args: tokens.collect(),
        raw: trimmed.to_owned(),
    })
}

fn tokenize(body: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut prev: Option<char> = None;

    for c in body.chars() {
        if c == '"' && prev != Some('\\') {
            in_quote = !in_quote;
            current.push(c);
        } else if matches!(c, ' ' | '\t' | '\n') && !in_quote {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
        prev = Some(c);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Walk parentheses outside quoted regions. `None` once depth goes negative.
///
/// Quotes only open a region inside the outermost parenthesis.
fn paren_depth(s: &str) -> Option<i64> {
    let mut depth: i64 = 0;
    let mut in_quote = false;
    for c in s.chars() {
        if c == '"' && depth > 0 {
            in_quote = !in_quote;
        }
        if !in_quote {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
        }
        if depth < 0 {
            return None;
        }
    }
    Some(depth)
}

/// Structural check only: `(`…`)` with balanced parentheses outside quotes.
pub fn is_balanced(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.starts_with('(') && trimmed.ends_with(')') && paren_depth(trimmed) == Some(0)
}

/// A prefix that still has unclosed parentheses (and never over-closed).
///
/// Front ends use this to keep reading lines before calling [`parse`].
pub fn is_incomplete(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.starts_with('(') && paren_depth(trimmed).is_some_and(|d| d > 0)
}
