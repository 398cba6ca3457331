//! protoc invocation for the compiled-binding workflow.
//!
//! The generator itself never needs protoc; this only keeps the `.pb.go`
//! binding next to the schema for projects that also consume the enum.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Executable looked up on `PATH`
pub const PROTOC: &str = "protoc";

/// Compile `schema` with `protoc --go_out`, writing next to the schema.
///
/// Returns the directory the binding was written to.
pub fn compile_schema<P: AsRef<Path>>(schema: P) -> Result<PathBuf> {
    let schema = schema.as_ref();
    let abs = schema
        .canonicalize()
        .map_err(|e| Error::Compiler(format!("schema file not found: {} ({})", schema.display(), e)))?;
    let dir = abs
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::Compiler(format!("schema has no parent directory: {}", abs.display())))?;

    let mut cmd = Command::new(PROTOC);
    cmd.arg(format!("--go_out={}", dir.display()))
        .arg(format!("--proto_path={}", dir.display()))
        .arg(&abs);

    tracing::info!(schema = %abs.display(), "compiling schema with protoc");

    let status = cmd
        .status()
        .map_err(|e| Error::Compiler(format!("cannot run {}: {}", PROTOC, e)))?;

    if !status.success() {
        return Err(Error::Compiler(format!("{} exited with {}", PROTOC, status)));
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_schema() {
        let dir = tempfile::tempdir().unwrap();
        let err = compile_schema(dir.path().join("nope.proto")).unwrap_err();
        match err {
            Error::Compiler(msg) => assert!(msg.contains("schema file not found")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
