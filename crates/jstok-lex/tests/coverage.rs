//! Scanner output must tile the source: no gaps, no overlaps, nothing dropped.

use jstok_lex::{concat, scan, Lexer, TokenKind};

const SOURCES: &[&str] = &[
    "",
    "a",
    "   ",
    "@if a + b === 0",
    "for (var i = 0; i < list.length; i++) {",
    r#"a ".b.c; d;" /*e*/ f"#,
    "\"unterminated",
    "'esc\\'aped' + 'tail\\",
    "/* never closed",
    "x?.5:1 ?? y?.z",
    "#@`~\\",
    "naïve + 日本 + €5",
    "a\r\n\tb",
    "1.2.3...4",
];

#[test]
fn concatenation_reproduces_source() {
    for src in SOURCES {
        assert_eq!(concat(&scan(src)), *src);
    }
}

#[test]
fn spans_are_contiguous_and_match_values() {
    for src in SOURCES {
        let tokens = scan(src);
        let mut at = 0;
        for tok in &tokens {
            assert_eq!(tok.span.start, at, "gap before {tok} in {src:?}");
            assert_eq!(&src[tok.span.start..tok.span.end], tok.value);
            assert!(!tok.span.is_empty());
            at = tok.span.end;
        }
        assert_eq!(at, src.len());
    }
}

#[test]
fn no_adjacent_whitespace_tokens() {
    for src in SOURCES {
        let tokens = scan(src);
        assert!(tokens
            .windows(2)
            .all(|w| !(w[0].kind == TokenKind::Whitespace && w[1].kind == TokenKind::Whitespace)));
    }
}

#[test]
fn iterator_matches_scan() {
    let src = "a.b(c) /* d */";
    let mut lexer = Lexer::new(src);
    let first = lexer.next().unwrap();
    assert_eq!(first.value, "a");
    assert_eq!(lexer.offset(), 1);
    let rest: Vec<_> = lexer.collect();
    let all = scan(src);
    assert_eq!(rest, all[1..].to_vec());
}

#[test]
fn invalid_tokens_are_single_characters() {
    for tok in scan("#@`\\€") {
        assert_eq!(tok.kind, TokenKind::Invalid);
        assert_eq!(tok.value.chars().count(), 1);
    }
}

// characters where the ordered rules compete: quotes, escapes, comment
// markers, dots next to digits, `?.`, whitespace and a multi-byte char
const ALPHABET: &[char] = &['"', '\'', '\\', '/', '*', '.', '1', '?', ' ', 'é'];

fn assert_tiles(src: &str) {
    let tokens = scan(src);
    assert_eq!(concat(&tokens), src);
    let mut at = 0;
    for tok in &tokens {
        assert_eq!(tok.span.start, at, "gap before {tok} in {src:?}");
        assert!(!tok.span.is_empty(), "empty token in {src:?}");
        at = tok.span.end;
    }
    assert_eq!(at, src.len(), "{src:?}");
}

#[test]
fn every_pair_and_triple_from_a_small_alphabet_tiles() {
    for &a in ALPHABET {
        for &b in ALPHABET {
            assert_tiles(&format!("{a}{b}"));
            for &c in ALPHABET {
                assert_tiles(&format!("{a}{b}{c}"));
            }
        }
    }
}
