// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decoders for raw argument tokens.

/// Interior of a `"..."` token. The interior may not contain another quote.
pub fn unquote_string(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('"')?.strip_suffix('"')?;
    (!inner.contains('"')).then_some(inner)
}

/// Identifier of a `'Type` token (ASCII letters, digits and `_`).
pub fn unquote_type(token: &str) -> Option<&str> {
    let ident = token.strip_prefix('\'')?;
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    (!ident.is_empty() && ident.chars().all(is_word)).then_some(ident)
}
