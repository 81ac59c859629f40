/// Reserved words, sorted so lookups can binary-search.
pub static KEYWORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Operators and punctuation, longest first. A shorter entry must never come
/// before a longer one it prefixes.
pub static PUNCTUATORS: &[&str] = &[
    // 4
    ">>>=",
    // 3
    "===", "!==", "**=", "<<=", ">>=", ">>>", "...", "&&=", "||=", "??=",
    // 2
    "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=",
    "%=", "&=", "|=", "^=", "<<", ">>", "**",
    // 1
    "{", "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-", "*", "/", "%", "&", "|", "^",
    "!", "~", "?", ":", "=", ".",
];

pub const COMMENT_OPEN: &str = "/*";
pub const COMMENT_CLOSE: &str = "*/";

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

/// Longest punctuator at the start of `rest`.
///
/// `?.` followed by a digit is a conditional operator and a number (`a?.5:b`).
pub fn punctuator_at(rest: &str) -> Option<&'static str> {
    PUNCTUATORS.iter().copied().find(|p| {
        rest.starts_with(p)
            && !(*p == "?." && rest[p.len()..].starts_with(|c: char| c.is_ascii_digit()))
    })
}

pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub(crate) fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

pub(crate) fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

pub(crate) fn is_name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
