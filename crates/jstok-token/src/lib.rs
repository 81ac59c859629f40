#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

pub mod span {
    use serde::Serialize;

    /// Half-open byte range into the scanned source.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct Span {
        pub start: usize,
        pub end: usize,
    }

    impl Span {
        pub fn new(start: usize, end: usize) -> Self {
            debug_assert!(start <= end);
            Self { start, end }
        }

        pub fn is_empty(&self) -> bool {
            self.start == self.end
        }
    }
}

pub mod token {
    use super::span::Span;
    use serde::Serialize;
    use std::fmt;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum TokenKind {
        Keyword,
        Name,
        Number,
        String,
        Comment,
        Punctuator,
        Whitespace,
        Invalid,
    }

    impl TokenKind {
        pub fn as_str(self) -> &'static str {
            match self {
                TokenKind::Keyword => "keyword",
                TokenKind::Name => "name",
                TokenKind::Number => "number",
                TokenKind::String => "string",
                TokenKind::Comment => "comment",
                TokenKind::Punctuator => "punctuator",
                TokenKind::Whitespace => "whitespace",
                TokenKind::Invalid => "invalid",
            }
        }

        /// Kinds that carry a `closed` flag.
        pub fn is_delimited(self) -> bool {
            matches!(self, TokenKind::String | TokenKind::Comment)
        }

        /// Whitespace and comments: present in the stream, invisible to analyses.
        pub fn is_trivia(self) -> bool {
            matches!(self, TokenKind::Whitespace | TokenKind::Comment)
        }
    }

    impl fmt::Display for TokenKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// A classified, verbatim slice of source text.
    ///
    /// `closed` is `Some` exactly when `kind` is [`TokenKind::String`] or
    /// [`TokenKind::Comment`]; the constructors keep it that way.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize)]
    pub struct Token {
        #[serde(rename = "type")]
        pub kind: TokenKind,
        pub value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub closed: Option<bool>,
        pub span: Span,
    }

    impl Token {
        /// Builds a token of a kind that does not carry a `closed` flag.
        pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
            debug_assert!(!kind.is_delimited(), "{kind} tokens need a closed flag");
            Self {
                kind,
                value: value.into(),
                closed: None,
                span,
            }
        }

        /// Builds a string or comment token.
        pub fn delimited(kind: TokenKind, value: impl Into<String>, closed: bool, span: Span) -> Self {
            debug_assert!(kind.is_delimited(), "{kind} tokens have no closed flag");
            Self {
                kind,
                value: value.into(),
                closed: Some(closed),
                span,
            }
        }

        pub fn is(&self, kind: TokenKind) -> bool {
            self.kind == kind
        }

        pub fn is_punct(&self, text: &str) -> bool {
            self.kind == TokenKind::Punctuator && self.value == text
        }

        /// `false` only for a string or comment that ran into end of input.
        pub fn is_closed(&self) -> bool {
            self.closed.unwrap_or(true)
        }
    }

    impl fmt::Display for Token {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} {:?}", self.kind, self.value)?;
            if self.closed == Some(false) {
                f.write_str(" (unclosed)")?;
            }
            Ok(())
        }
    }

    /// Rebuilds the source text a token sequence covers.
    pub fn concat(tokens: &[Token]) -> String {
        let len = tokens.iter().map(|t| t.value.len()).sum();
        let mut out = String::with_capacity(len);
        for tok in tokens {
            out.push_str(&tok.value);
        }
        out
    }
}

pub use span::Span;
pub use token::{concat, Token, TokenKind};
