use jstok_token::{Token, TokenKind};
use std::collections::HashSet;

/// Punctuators after which a name is a property, not a root.
const MEMBER_ACCESS: &[&str] = &[".", "?."];

fn is_member_access(tok: &Token) -> bool {
    MEMBER_ACCESS.iter().any(|p| tok.is_punct(p))
}

/// Root identifiers referenced by `tokens`, in order of first appearance.
///
/// A `name` token is a root unless the nearest preceding non-trivia token is a
/// member access (`a.b`, `a /**/ . b`, `a?.b` all make `b` a property).
/// Keywords are never roots, and string/comment contents are never inspected.
pub fn namespaces(tokens: &[Token]) -> Vec<&str> {
    let mut roots = Vec::new();
    let mut seen = HashSet::new();
    let mut prev: Option<&Token> = None;

    for tok in tokens {
        if tok.kind.is_trivia() {
            continue;
        }
        if tok.is(TokenKind::Name)
            && !prev.is_some_and(is_member_access)
            && seen.insert(tok.value.as_str())
        {
            roots.push(tok.value.as_str());
        }
        prev = Some(tok);
    }

    roots
}
