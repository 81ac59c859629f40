use crate::trim::trim;
use jstok_token::{Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    Brace,
    Paren,
    Square,
}

impl Bracket {
    /// `Some((kind, true))` for an opener, `Some((kind, false))` for a closer.
    fn classify(punct: &str) -> Option<(Bracket, bool)> {
        match punct {
            "{" => Some((Bracket::Brace, true)),
            "}" => Some((Bracket::Brace, false)),
            "(" => Some((Bracket::Paren, true)),
            ")" => Some((Bracket::Paren, false)),
            "[" => Some((Bracket::Square, true)),
            "]" => Some((Bracket::Square, false)),
            _ => None,
        }
    }
}

/// Per-kind bracket depth over the punctuator tokens of a sequence.
///
/// Brackets inside string and comment values are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BracketBalance {
    pub brace: i64,
    pub paren: i64,
    pub square: i64,
    /// A closer appeared while its kind had no open bracket.
    pub stray_close: bool,
}

impl BracketBalance {
    pub fn of(tokens: &[Token]) -> Self {
        let mut balance = Self::default();
        for tok in tokens.iter().filter(|t| t.is(TokenKind::Punctuator)) {
            if let Some((kind, open)) = Bracket::classify(&tok.value) {
                balance.step(kind, open);
            }
        }
        balance
    }

    fn depth_mut(&mut self, kind: Bracket) -> &mut i64 {
        match kind {
            Bracket::Brace => &mut self.brace,
            Bracket::Paren => &mut self.paren,
            Bracket::Square => &mut self.square,
        }
    }

    fn step(&mut self, kind: Bracket, open: bool) {
        let depth = self.depth_mut(kind);
        if open {
            *depth += 1;
        } else {
            *depth -= 1;
            if *depth < 0 {
                self.stray_close = true;
            }
        }
    }

    pub fn depth(&self, kind: Bracket) -> i64 {
        match kind {
            Bracket::Brace => self.brace,
            Bracket::Paren => self.paren,
            Bracket::Square => self.square,
        }
    }

    pub fn is_balanced(&self) -> bool {
        !self.stray_close && self.brace == 0 && self.paren == 0 && self.square == 0
    }
}

/// Whether `tokens` can be embedded as a single value-producing expression.
///
/// Rejects empty and comment-only input and anything with unbalanced
/// brackets (`if (a) {`, `}`, `list.each(function() {`). This is a shape
/// check, not a parse: a balanced statement such as `if (a)` is accepted.
pub fn is_output_expression(tokens: &[Token]) -> bool {
    let body = trim(tokens);
    if body.is_empty() || body.iter().all(|t| t.is(TokenKind::Comment)) {
        return false;
    }
    BracketBalance::of(body).is_balanced()
}
