use crate::tables::{
    is_keyword, is_name_continue, is_name_start, is_quote, is_whitespace, punctuator_at,
    COMMENT_CLOSE, COMMENT_OPEN,
};
use jstok_token::{Span, Token, TokenKind};
use tracing::{debug, trace};

/// Lossless scanner. Yields tokens whose values tile the source exactly.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the next unscanned character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }
    fn peek2(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.bump();
        }
    }

    fn span(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    fn text(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    fn plain(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.text(start), self.span(start))
    }

    fn delimited(&self, kind: TokenKind, start: usize, closed: bool) -> Token {
        if !closed {
            debug!(%kind, start, "unterminated literal runs to end of input");
        }
        Token::delimited(kind, self.text(start), closed, self.span(start))
    }

    fn next_tok(&mut self) -> Option<Token> {
        let start = self.pos;
        let c = self.peek()?;

        // order matters: `/*` before `/`, `.5` before `.`
        let tok = if is_whitespace(c) {
            self.eat_while(is_whitespace);
            self.plain(TokenKind::Whitespace, start)
        } else if self.rest().starts_with(COMMENT_OPEN) {
            self.scan_comment(start)
        } else if is_quote(c) {
            self.scan_string(start, c)
        } else if c.is_ascii_digit() || (c == '.' && self.peek2().is_some_and(|d| d.is_ascii_digit())) {
            self.scan_number(start)
        } else if is_name_start(c) {
            self.eat_while(is_name_continue);
            let kind = if is_keyword(self.text(start)) {
                TokenKind::Keyword
            } else {
                TokenKind::Name
            };
            self.plain(kind, start)
        } else if let Some(p) = punctuator_at(self.rest()) {
            self.pos += p.len();
            self.plain(TokenKind::Punctuator, start)
        } else {
            self.bump();
            self.plain(TokenKind::Invalid, start)
        };

        trace!(kind = %tok.kind, start = tok.span.start, end = tok.span.end, "token");
        Some(tok)
    }

    fn scan_comment(&mut self, start: usize) -> Token {
        self.pos += COMMENT_OPEN.len();
        let closed = match self.rest().find(COMMENT_CLOSE) {
            Some(at) => {
                self.pos += at + COMMENT_CLOSE.len();
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        };
        self.delimited(TokenKind::Comment, start, closed)
    }

    fn scan_string(&mut self, start: usize, quote: char) -> Token {
        self.bump();
        let mut closed = false;
        while let Some(c) = self.bump() {
            if c == quote {
                closed = true;
                break;
            }
            if c == '\\' {
                // protects the next char, if there is one
                self.bump();
            }
        }
        self.delimited(TokenKind::String, start, closed)
    }

    // digits with at most one '.', or '.' followed by digits
    fn scan_number(&mut self, start: usize) -> Token {
        self.eat_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }
        self.plain(TokenKind::Number, start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_tok()
    }
}

/// Scans `src` into a token sequence. Never fails.
pub fn scan(src: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(src).collect();
    debug!(bytes = src.len(), tokens = tokens.len(), "scan complete");
    tokens
}
