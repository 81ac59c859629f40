use jstok_lex::{is_output_expression, scan};

fn check(src: &str) -> bool {
    is_output_expression(&scan(src))
}

#[test]
fn value_expressions() {
    for src in [
        "value",
        " value ",
        " value /**/",
        " value /*}{*/",
        "value + a",
        "value + 2",
        "3 + value + 2.3",
        "value;",
        "value ? a : b",
        "value ? a : b ? c : d + 9.9",
        "f(a, [1, 2], { k: v })",
        "'{' + x + \"(\"",
        // whitespace between comments is content to the balance check
        "/*a*/ /*b*/",
        " /*a*/ /*b*/ ",
    ] {
        assert!(check(src), "{src:?} should be an output expression");
    }
}

#[test]
fn empty_and_comment_only() {
    for src in ["", " ", "\n\t", "/*value*/", " /*a*//*b*/ "] {
        assert!(!check(src), "{src:?} has no value");
    }
}

#[test]
fn bare_block_delimiters() {
    for src in ["{", " { ", "}", " } "] {
        assert!(!check(src), "{src:?}");
    }
}

#[test]
fn control_flow_headers() {
    for src in [
        "if (value) {",
        " if (value) { ",
        "for (var i = 0; i < list.length; i++) {",
        " for (var i = 0; i < list.length; i++) { ",
        "list.each(function() {",
        " list.each(function() { ",
        "} else {",
        "})",
    ] {
        assert!(!check(src), "{src:?}");
    }
}

#[test]
fn stray_and_mismatched_closers() {
    assert!(!check(") + ("));
    assert!(!check("a]"));
    assert!(!check("(a]"));
}

#[test]
fn balanced_statement_is_not_detected() {
    // shape-only check: a complete condition with no block passes
    assert!(check("if (value)"));
}
