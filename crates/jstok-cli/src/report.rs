//! Combined analysis of one fragment, as printed by `jstok analyze`.

use jstok_lex::{is_output_expression, namespaces, BracketBalance, Token, TokenKind};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub brace: i64,
    pub paren: i64,
    pub square: i64,
    pub stray_close: bool,
}

impl From<BracketBalance> for BalanceReport {
    fn from(b: BracketBalance) -> Self {
        Self {
            brace: b.brace,
            paren: b.paren,
            square: b.square,
            stray_close: b.stray_close,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Analysis<'a> {
    /// Content hash, so compiled fragments can be cached by source.
    pub sha256: String,
    pub bytes: usize,
    pub tokens: usize,
    pub invalid: usize,
    pub unclosed_strings: usize,
    pub unclosed_comments: usize,
    pub namespaces: Vec<&'a str>,
    pub balance: BalanceReport,
    pub output_expression: bool,
}

impl<'a> Analysis<'a> {
    pub fn new(src: &str, tokens: &'a [Token]) -> Self {
        let unclosed = |kind| {
            tokens
                .iter()
                .filter(|t| t.is(kind) && !t.is_closed())
                .count()
        };
        Self {
            sha256: sha256_hex(src),
            bytes: src.len(),
            tokens: tokens.len(),
            invalid: tokens.iter().filter(|t| t.is(TokenKind::Invalid)).count(),
            unclosed_strings: unclosed(TokenKind::String),
            unclosed_comments: unclosed(TokenKind::Comment),
            namespaces: namespaces(tokens),
            balance: BracketBalance::of(jstok_lex::trim(tokens)).into(),
            output_expression: is_output_expression(tokens),
        }
    }

    /// Whether a compiler would want to reject the fragment outright.
    pub fn is_malformed(&self) -> bool {
        self.invalid > 0 || self.unclosed_strings > 0 || self.unclosed_comments > 0
    }
}

impl fmt::Display for Analysis<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sha256:            {}", self.sha256)?;
        writeln!(f, "bytes:             {}", self.bytes)?;
        writeln!(f, "tokens:            {}", self.tokens)?;
        writeln!(f, "invalid:           {}", self.invalid)?;
        writeln!(f, "unclosed strings:  {}", self.unclosed_strings)?;
        writeln!(f, "unclosed comments: {}", self.unclosed_comments)?;
        writeln!(f, "namespaces:        {}", self.namespaces.join(", "))?;
        writeln!(
            f,
            "balance:           {{}} {}  () {}  [] {}{}",
            self.balance.brace,
            self.balance.paren,
            self.balance.square,
            if self.balance.stray_close {
                "  (stray closer)"
            } else {
                ""
            }
        )?;
        write!(
            f,
            "output expression: {}",
            if self.output_expression { "yes" } else { "no" }
        )
    }
}

pub fn sha256_hex(data: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    format!("{:x}", hasher.finalize())
}
