//! Entry recovery from a compiled `.pb.go` binding.
//!
//! protoc-gen-go emits a `ErrorCode_name` table of the form
//!
//! ```text
//! var (
//!     ErrorCode_name = map[int32]string{
//!         0:     "UNKNOWN",
//!         10001: "USER_NOT_FOUND",
//!     }
//! ```
//!
//! Every `INTEGER: "NAME"` occurrence is collected; a later occurrence of a
//! code replaces an earlier one. Compiled bindings carry no annotations, so
//! all recovered entries are internal.

use super::read_source;
use crate::entry::Entry;
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

static TABLE_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\d+):\s*"([^"]+)""#).expect("table entry pattern is valid"));

/// Parse the compiled binding file at `path`.
pub fn parse_legacy_binding<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let text = read_source(path)?;
    let entries = parse_legacy_str(&text);

    tracing::debug!(path = %path.display(), count = entries.len(), "parsed compiled binding");
    super::warn_duplicates(&entries, path);

    Ok(entries)
}

/// Parse compiled binding text into entries sorted by code.
pub fn parse_legacy_str(text: &str) -> Vec<Entry> {
    let mut table: BTreeMap<i64, &str> = BTreeMap::new();

    for line in text.lines() {
        for caps in TABLE_ENTRY.captures_iter(line) {
            let (Some(code), Some(name)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if let Ok(code) = code.as_str().parse::<i64>() {
                table.insert(code, name.as_str());
            }
        }
    }

    table
        .into_iter()
        .map(|(code, name)| Entry::internal(code, name, ""))
        .collect()
}
