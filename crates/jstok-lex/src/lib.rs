#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Scanner and shape analyses for template expression fragments.
//!
//! [`scan`] turns any string into a lossless token sequence. The remaining
//! functions only read that sequence: [`namespaces`] lists the free
//! identifiers it references, [`trim`] and friends strip boundary whitespace,
//! and [`is_output_expression`] decides whether it can be interpolated as a
//! single value.

mod classify;
mod lexer;
mod namespaces;
mod tables;
mod trim;

pub use classify::{is_output_expression, Bracket, BracketBalance};
pub use lexer::{scan, Lexer};
pub use namespaces::namespaces;
pub use tables::{is_keyword, KEYWORDS, PUNCTUATORS};
pub use trim::{trim, trim_left, trim_right};

pub use jstok_token::{concat, Span, Token, TokenKind};
