//! Entry sources.
//!
//! Two producers yield the same ordered `Vec<Entry>`:
//! - [`schema`] reads the `ErrorCode` enum of a `.proto` schema and
//!   classifies entries through the `@http=` annotation
//! - [`legacy`] recovers code/name pairs from a compiled `.pb.go` binding;
//!   every entry it produces is internal

pub mod schema;
pub mod legacy;

pub use schema::{parse_schema, parse_schema_str};
pub use legacy::{parse_legacy_binding, parse_legacy_str};

use crate::error::{Error, Result};
use std::path::Path;

/// Read a source file as text. Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Log duplicate codes and names. Parsing stays tolerant; generators reject
/// sets that cannot be rendered.
pub(crate) fn warn_duplicates(entries: &[crate::entry::Entry], source: &Path) {
    let mut codes = std::collections::HashSet::new();
    let mut names = std::collections::HashSet::new();

    for entry in entries {
        if !codes.insert(entry.code) {
            tracing::warn!(source = %source.display(), code = entry.code, "duplicate error code");
        }
        if !names.insert(entry.name.as_str()) {
            tracing::warn!(source = %source.display(), name = %entry.name, "duplicate error name");
        }
    }
}
