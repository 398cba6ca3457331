//! Error-code entry model.
//!
//! An [`Entry`] is one line of the `ErrorCode` enum together with its
//! classification: *public* entries carry an HTTP status and a client-facing
//! message, *internal* entries only carry a free-text description and are
//! surfaced to clients generically.

use serde::Serialize;

/// Prefix of every generated error identifier.
pub const IDENT_PREFIX: &str = "Err";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Numeric identifier, the ordering key
    pub code: i64,

    /// UPPER_SNAKE_CASE enum name
    pub name: String,

    /// Description of an internal entry (empty for public entries)
    pub comment: String,

    /// HTTP status as annotated, 0 marks the entry internal
    pub http_status: i64,

    /// Client-facing message (empty for internal entries)
    pub http_message: String,
}

impl Entry {
    /// Create an internal entry.
    pub fn internal(code: i64, name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            comment: comment.into(),
            http_status: 0,
            http_message: String::new(),
        }
    }

    /// Create a public entry. A status of zero or below yields an internal
    /// entry instead.
    pub fn public(
        code: i64,
        name: impl Into<String>,
        http_status: i64,
        http_message: impl Into<String>,
    ) -> Self {
        if http_status <= 0 {
            return Self::internal(code, name, http_message);
        }
        Self {
            code,
            name: name.into(),
            comment: String::new(),
            http_status,
            http_message: http_message.into(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.http_status == 0
    }

    /// Generated identifier for this entry: `USER_NOT_FOUND` → `ErrUserNotFound`.
    pub fn generated_identifier(&self) -> String {
        format!("{}{}", IDENT_PREFIX, pascal_from_upper_snake(&self.name))
    }

    /// Human-readable description regardless of classification.
    pub fn description(&self) -> &str {
        if self.is_internal() {
            &self.comment
        } else {
            &self.http_message
        }
    }
}

/// Split on `_`, lowercase each segment and capitalise its first character.
/// Empty segments are dropped.
fn pascal_from_upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_').filter(|s| !s.is_empty()) {
        let lower = segment.to_lowercase();
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Sort entries by code, keeping scan order among equal codes.
pub fn sort_by_code(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.code);
}
