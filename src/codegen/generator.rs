//! The generator contract shared by every target.

use crate::codegen::types::{GenerationConfig, OutputFile};
use crate::codegen::utils::is_go_identifier;
use crate::entry::Entry;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Turns parsed entries into an ordered set of source files.
///
/// Implementations hold no state, so a single instance can serve any number
/// of concurrent calls.
pub trait Generator: Send + Sync {
    /// Registry name of this target.
    fn target(&self) -> &'static str;

    /// Render every file of this target.
    ///
    /// `entries` are expected in ascending code order, as the parsers
    /// return them; they are embedded in that order.
    fn generate(&self, config: &GenerationConfig, entries: &[Entry]) -> Result<Vec<OutputFile>>;
}

/// Reject entry sets the emitted Go could not compile.
pub fn validate_entries(entries: &[Entry]) -> Result<()> {
    let mut codes: HashMap<i64, &str> = HashMap::new();
    let mut idents: HashMap<String, &str> = HashMap::new();

    for entry in entries {
        let ident = entry.generated_identifier();
        if !is_go_identifier(&ident) || ident == crate::entry::IDENT_PREFIX {
            return Err(Error::Render(format!(
                "entry name '{}' does not form a Go identifier",
                entry.name
            )));
        }

        if let Some(previous) = codes.insert(entry.code, &entry.name) {
            return Err(Error::Render(format!(
                "code {} is declared by both {} and {}",
                entry.code, previous, entry.name
            )));
        }

        if let Some(previous) = idents.insert(ident.clone(), &entry.name) {
            return Err(Error::Render(format!(
                "{} and {} both generate {}",
                previous, entry.name, ident
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_distinct_entries() {
        let entries = vec![
            Entry::internal(0, "UNKNOWN", ""),
            Entry::public(10001, "USER_NOT_FOUND", 404, "用户不存在"),
        ];
        assert!(validate_entries(&entries).is_ok());
        assert!(validate_entries(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        for name in ["", "___", "USER-NOT-FOUND", "USER.NOT"] {
            let result = validate_entries(&[Entry::internal(1, name, "")]);
            assert!(matches!(result, Err(Error::Render(_))), "name {:?}", name);
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_code() {
        let entries = vec![Entry::internal(1, "A", ""), Entry::internal(1, "B", "")];
        let err = validate_entries(&entries).unwrap_err();
        assert!(err.to_string().contains("code 1"));
    }

    #[test]
    fn test_validate_rejects_colliding_identifiers() {
        let entries = vec![Entry::internal(1, "USER_NOT_FOUND", ""), Entry::internal(2, "USER__NOT_FOUND", "")];
        let err = validate_entries(&entries).unwrap_err();
        assert!(err.to_string().contains("ErrUserNotFound"));
    }
}
