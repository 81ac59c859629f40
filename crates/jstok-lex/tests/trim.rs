use jstok_lex::{scan, trim, trim_left, trim_right, Span, Token, TokenKind};

fn shape(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.value.as_str())).collect()
}

#[test]
fn trim_left_drops_leading_whitespace_only() {
    for (src, expected) in [
        (" value", vec![(TokenKind::Name, "value")]),
        ("     value", vec![(TokenKind::Name, "value")]),
        (
            "     value ",
            vec![(TokenKind::Name, "value"), (TokenKind::Whitespace, " ")],
        ),
        ("value", vec![(TokenKind::Name, "value")]),
    ] {
        let tokens = scan(src);
        let len = tokens.len();
        assert_eq!(shape(trim_left(&tokens)), expected, "{src:?}");
        assert_eq!(tokens.len(), len);
    }
}

#[test]
fn trim_right_drops_trailing_whitespace_only() {
    for (src, expected) in [
        ("value ", vec![(TokenKind::Name, "value")]),
        ("value     ", vec![(TokenKind::Name, "value")]),
        (
            " value     ",
            vec![(TokenKind::Whitespace, " "), (TokenKind::Name, "value")],
        ),
    ] {
        let tokens = scan(src);
        let len = tokens.len();
        assert_eq!(shape(trim_right(&tokens)), expected, "{src:?}");
        assert_eq!(tokens.len(), len);
    }
}

#[test]
fn trim_both_ends() {
    for src in [" value ", "    value     ", "value"] {
        let tokens = scan(src);
        let before = tokens.clone();
        assert_eq!(shape(trim(&tokens)), [(TokenKind::Name, "value")], "{src:?}");
        assert_eq!(tokens, before);
    }
}

#[test]
fn comments_at_the_edges_survive() {
    let tokens = scan(" /*a*/ value /*b*/ ");
    let trimmed = trim(&tokens);
    assert_eq!(trimmed.first().unwrap().kind, TokenKind::Comment);
    assert_eq!(trimmed.last().unwrap().kind, TokenKind::Comment);
    assert_eq!(trimmed.len(), 5);
}

#[test]
fn trims_of_blank_input_are_empty() {
    assert!(trim(&scan("")).is_empty());
    assert!(trim(&scan("   \n")).is_empty());
    assert!(trim_left(&scan(" ")).is_empty());
    assert!(trim_right(&scan(" ")).is_empty());
}

#[test]
fn trim_is_idempotent() {
    for src in ["", " ", " a ", "a", " /**/ ", "\n a + b \t"] {
        let tokens = scan(src);
        let once = trim(&tokens);
        assert_eq!(trim(once), once, "{src:?}");
    }
}

#[test]
fn hand_built_whitespace_runs_are_dropped_whole() {
    let ws = |start| Token::new(TokenKind::Whitespace, " ", Span::new(start, start + 1));
    let tokens = vec![
        ws(0),
        ws(1),
        Token::new(TokenKind::Name, "a", Span::new(2, 3)),
        ws(3),
        ws(4),
    ];
    assert_eq!(shape(trim(&tokens)), [(TokenKind::Name, "a")]);
    assert_eq!(tokens.len(), 5);
}

#[test]
fn trimmed_result_is_a_view_into_the_input() {
    let tokens = scan(" a ");
    let trimmed = trim(&tokens);
    assert!(std::ptr::eq(&trimmed[0], &tokens[1]));
}
