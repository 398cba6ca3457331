//! `ErrorCode` enum extraction from schema text.
//!
//! Only the first `enum ErrorCode {` block is read; the first line starting
//! with `}` ends the scan. Inside the block each line is matched against
//!
//! ```text
//! NAME = 123;            // free text            -> internal
//! NAME = 123;            // message @http=404    -> public
//! ```
//!
//! Lines that do not fit the grammar are skipped silently so hand-edited
//! schemas with comments and blank separators keep working.

use super::read_source;
use crate::entry::{sort_by_code, Entry};
use crate::error::Result;
use std::path::Path;

const ENUM_KEYWORD: &str = "enum";
const ENUM_NAME: &str = "ErrorCode";
const HTTP_MARKER: &str = "@http=";

/// Parse the `ErrorCode` enum of the schema file at `path`.
pub fn parse_schema<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let text = read_source(path)?;
    let entries = parse_schema_str(&text);

    tracing::debug!(path = %path.display(), count = entries.len(), "parsed schema");
    super::warn_duplicates(&entries, path);

    Ok(entries)
}

/// Parse schema text. Entries are returned sorted by code; ties keep their
/// order of appearance.
pub fn parse_schema_str(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut in_block = false;

    for line in text.lines() {
        if !in_block {
            in_block = opens_block(line);
            continue;
        }

        if closes_block(line) {
            break;
        }

        if let Some(entry) = parse_entry_line(line) {
            entries.push(entry);
        }
    }

    sort_by_code(&mut entries);
    entries
}

/// Minimal forward-only scanner over one line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Skip ASCII whitespace, returning how many bytes were skipped.
    fn skip_ws(&mut self) -> usize {
        let before = self.rest.len();
        self.rest = self.rest.trim_start_matches(is_space);
        before - self.rest.len()
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self.rest.find(|c: char| !pred(c)).unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        head
    }

    fn eat(&mut self, token: &str) -> bool {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn rest(&self) -> &'a str {
        self.rest
    }
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `^\s*enum\s+ErrorCode\s*\{`
fn opens_block(line: &str) -> bool {
    let mut cur = Cursor::new(line);
    cur.skip_ws();
    if !cur.eat(ENUM_KEYWORD) || cur.skip_ws() == 0 || !cur.eat(ENUM_NAME) {
        return false;
    }
    cur.skip_ws();
    cur.eat("{")
}

/// `^\s*\}`
fn closes_block(line: &str) -> bool {
    line.trim_start_matches(is_space).starts_with('}')
}

/// `NAME = INTEGER ;` optionally followed by `// comment`.
fn parse_entry_line(line: &str) -> Option<Entry> {
    let mut cur = Cursor::new(line);
    cur.skip_ws();

    let name = cur.take_while(is_word);
    if name.is_empty() {
        return None;
    }

    cur.skip_ws();
    if !cur.eat("=") {
        return None;
    }

    cur.skip_ws();
    let digits = cur.take_while(|c| c.is_ascii_digit());
    let code: i64 = digits.parse().ok()?;

    cur.skip_ws();
    if !cur.eat(";") {
        return None;
    }

    cur.skip_ws();
    let comment = if cur.rest().is_empty() {
        ""
    } else if cur.eat("//") {
        cur.rest().trim()
    } else {
        return None;
    };

    Some(match parse_annotation(comment) {
        Some((message, status)) => Entry::public(code, name, status, message),
        None => Entry::internal(code, name, comment),
    })
}

/// Split `message @http=404` into its message and status.
///
/// The marker must be the last thing in the comment, be preceded by
/// whitespace and by at least one character of message text. The status is
/// not range-checked; only zero, or digits too long for an `i64`, count as no
/// annotation.
fn parse_annotation(comment: &str) -> Option<(&str, i64)> {
    let body = comment.trim_end_matches(is_space);
    let at = body.rfind(HTTP_MARKER)?;

    let digits = &body[at + HTTP_MARKER.len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let before = &body[..at];
    let text = before.trim_end_matches(is_space);
    if text.is_empty() || text.len() == before.len() {
        return None;
    }

    let status: i64 = digits.parse().ok().filter(|s| *s != 0)?;
    Some((text.trim(), status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_block() {
        assert!(opens_block("enum ErrorCode {"));
        assert!(opens_block("  enum   ErrorCode{"));
        assert!(opens_block("\tenum ErrorCode { // codes"));
        assert!(!opens_block("enumErrorCode {"));
        assert!(!opens_block("enum ErrorCodes {"));
        assert!(!opens_block("enum ErrorCode"));
        assert!(!opens_block("// enum ErrorCode {"));
    }

    #[test]
    fn test_closes_block() {
        assert!(closes_block("}"));
        assert!(closes_block("    };"));
        assert!(!closes_block("  // }"));
    }

    #[test]
    fn test_entry_line_variants() {
        let e = parse_entry_line("    USER_NOT_FOUND = 10001;  // 用户不存在 @http=404").unwrap();
        assert_eq!(e, Entry::public(10001, "USER_NOT_FOUND", 404, "用户不存在"));

        let e = parse_entry_line("DB_TIMEOUT=20001;// 数据库超时").unwrap();
        assert_eq!(e, Entry::internal(20001, "DB_TIMEOUT", "数据库超时"));

        let e = parse_entry_line("  BARE = 7;").unwrap();
        assert_eq!(e, Entry::internal(7, "BARE", ""));
    }

    #[test]
    fn test_entry_line_rejects() {
        assert!(parse_entry_line("").is_none());
        assert!(parse_entry_line("   // USER = 1; // commented out").is_none());
        assert!(parse_entry_line("USER = -1;").is_none());
        assert!(parse_entry_line("USER = 1").is_none());
        assert!(parse_entry_line("USER = 1; /* block */").is_none());
        assert!(parse_entry_line("USER = 1 [deprecated = true];").is_none());
        assert!(parse_entry_line("USER = 99999999999999999999;").is_none());
    }

    #[test]
    fn test_annotation() {
        assert_eq!(parse_annotation("用户不存在 @http=404"), Some(("用户不存在", 404)));
        assert_eq!(parse_annotation("bad  input   @http=400  "), Some(("bad  input", 400)));
        assert_eq!(
            parse_annotation("see @http=500 docs @http=503"),
            Some(("see @http=500 docs", 503))
        );
        assert_eq!(parse_annotation("@http=404"), None);
        assert_eq!(parse_annotation("text@http=404"), None);
        assert_eq!(parse_annotation("text @http=404 trailing"), None);
        assert_eq!(parse_annotation("text @http="), None);
        assert_eq!(parse_annotation("text @http=0"), None);
        assert_eq!(parse_annotation("text @http=70000"), Some(("text", 70000)));
        assert_eq!(parse_annotation("text @http=99999999999999999999"), None);
        assert_eq!(parse_annotation(""), None);
    }

    #[test]
    fn test_only_first_block_is_read() {
        let text = "\
enum Other {
    NOT_ME = 1;
}
enum ErrorCode {
    A = 3; // a
    B = 1; // b @http=400
}
enum ErrorCode {
    C = 2;
}
";
        let entries = parse_schema_str(text);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_no_block_yields_nothing() {
        assert!(parse_schema_str("USER = 1; // x @http=404\n").is_empty());
    }

    #[test]
    fn test_nonstandard_status_stays_public() {
        let text = "enum ErrorCode {\n    CUSTOM = 1; // custom failure @http=70000\n}\n";
        let entries = parse_schema_str(text);
        assert_eq!(entries, vec![Entry::public(1, "CUSTOM", 70000, "custom failure")]);
        assert!(!entries[0].is_internal());
        assert!(entries[0].comment.is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let text = "enum ErrorCode {\r\n  A = 1; // a @http=400\r\n}\r\n";
        assert_eq!(parse_schema_str(text), vec![Entry::public(1, "A", 400, "a")]);
    }
}
