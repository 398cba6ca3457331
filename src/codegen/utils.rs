//! Helpers for emitting Go source.

use convert_case::{Case, Casing};

/// Go reserved words, which cannot name a package or a declaration.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

/// First line of every generated file, recognised by Go tooling.
pub const GENERATED_HEADER: &str = "// Code generated by generrorx. DO NOT EDIT.";

/// Derive a Go package clause name from a module or package path.
///
/// Takes the last `/` segment and flattens it: `github.com/acme/my-app` → `myapp`.
pub fn go_package_name(package: &str) -> String {
    let last = package.trim().trim_end_matches('/').rsplit('/').next().unwrap_or("");
    last.to_case(Case::Flat)
}

/// ASCII Go identifier that is not a keyword.
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !GO_KEYWORDS.contains(&s)
}

/// Render `s` as a double-quoted Go string literal.
///
/// Backslashes, quotes and control characters are escaped; other characters,
/// including non-ASCII text, are kept verbatim since Go source is UTF-8.
pub fn go_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{:02x}", code));
                } else {
                    out.push_str(&format!("\\u{:04x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Flatten free text into something safe to put after `//`.
pub fn go_line_comment(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}
