//! Boundary whitespace removal. Every function returns a sub-slice of its
//! input; nothing is copied or mutated.

use jstok_token::{Token, TokenKind};

fn is_ws(tok: &Token) -> bool {
    tok.is(TokenKind::Whitespace)
}

/// Drops the leading run of whitespace tokens (a single token in scanner output).
pub fn trim_left(tokens: &[Token]) -> &[Token] {
    let first = tokens.iter().position(|t| !is_ws(t)).unwrap_or(tokens.len());
    &tokens[first..]
}

/// Drops the trailing run of whitespace tokens.
pub fn trim_right(tokens: &[Token]) -> &[Token] {
    let end = tokens.iter().rposition(|t| !is_ws(t)).map_or(0, |i| i + 1);
    &tokens[..end]
}

/// Drops whitespace at both ends. Comments are kept.
pub fn trim(tokens: &[Token]) -> &[Token] {
    trim_right(trim_left(tokens))
}
