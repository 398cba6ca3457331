//! End-to-end generation: read entries, resolve the target, render, write.

use crate::codegen::fs_utils::write_outputs;
use crate::codegen::registry::GeneratorRegistry;
use crate::codegen::types::GenerationConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::parser::{parse_legacy_binding, parse_schema};
use serde::Serialize;
use std::path::PathBuf;

/// Where entries are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// `.proto` schema with `@http=` annotations
    Schema(PathBuf),
    /// compiled `.pb.go` binding, no classification available
    LegacyBinding(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &std::path::Path {
        match self {
            InputSource::Schema(p) | InputSource::LegacyBinding(p) => p.as_path(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InputSource::Schema(_) => "schema",
            InputSource::LegacyBinding(_) => "compiled binding",
        }
    }

    /// Read and parse entries from this source.
    pub fn load_entries(&self) -> Result<Vec<Entry>> {
        match self {
            InputSource::Schema(path) => parse_schema(path),
            InputSource::LegacyBinding(path) => parse_legacy_binding(path),
        }
    }
}

/// Fully resolved options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    pub package_name: String,
    pub import_path: String,
    pub target: String,
    pub default_message: String,
    pub input: InputSource,
    pub output_dir: PathBuf,
}

impl GenOptions {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            package_name: self.package_name.clone(),
            import_path: self.import_path.clone(),
            target_name: self.target.clone(),
            default_internal_message: self.default_message.clone(),
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub target: String,
    pub entries: usize,
    pub public_entries: usize,
    pub files: Vec<PathBuf>,
}

/// Run the whole pipeline with the built-in generators.
///
/// Returns `Ok(None)` without writing anything when the input holds no
/// entries.
pub fn run_generate(opts: &GenOptions) -> Result<Option<GenerationReport>> {
    run_generate_with(&GeneratorRegistry::with_builtin(), opts)
}

/// Run the pipeline against a caller-supplied registry.
pub fn run_generate_with(
    registry: &GeneratorRegistry,
    opts: &GenOptions,
) -> Result<Option<GenerationReport>> {
    let generator = registry.resolve(&opts.target)?;

    let entries = opts.input.load_entries()?;
    tracing::info!(
        source = %opts.input.path().display(),
        kind = opts.input.kind(),
        count = entries.len(),
        "loaded error codes"
    );

    if entries.is_empty() {
        tracing::warn!(source = %opts.input.path().display(), "no error code entries found");
        return Ok(None);
    }

    let files = generator.generate(&opts.generation_config(), &entries)?;
    let written = write_outputs(&opts.output_dir, &files)?;

    Ok(Some(GenerationReport {
        target: generator.target().to_string(),
        entries: entries.len(),
        public_entries: entries.iter().filter(|e| !e.is_internal()).count(),
        files: written,
    }))
}

/// Pretty JSON listing of entries, for inspection.
pub fn entries_to_json(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SCHEMA: &str = "\
enum ErrorCode {
    DB_CONNECT_FAILED = 20001; // 数据库连接失败
    USER_NOT_FOUND    = 10001; // 用户不存在 @http=404
}
";

    fn options(dir: &std::path::Path, input: InputSource, target: &str) -> GenOptions {
        GenOptions {
            package_name: "errorx".to_string(),
            import_path: "myapp/errorx".to_string(),
            target: target.to_string(),
            default_message: "服务繁忙".to_string(),
            input,
            output_dir: dir.join("out"),
        }
    }

    #[test]
    fn test_run_generate_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("error.proto");
        std::fs::write(&schema, SCHEMA).unwrap();

        let report = run_generate(&options(dir.path(), InputSource::Schema(schema), "gozero"))
            .unwrap()
            .unwrap();

        assert_eq!(report.target, "gozero");
        assert_eq!(report.entries, 2);
        assert_eq!(report.public_entries, 1);
        let out = dir.path().join("out");
        assert_eq!(
            report.files,
            vec![out.join("types.go"), out.join("errors_gen.go"), out.join("handler.go")]
        );
        assert!(out.join("handler.go").exists());
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("error.proto");
        std::fs::write(&schema, "syntax = \"proto3\";\n").unwrap();

        let report = run_generate(&options(dir.path(), InputSource::Schema(schema), "default")).unwrap();
        assert!(report.is_none());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_unknown_target_fails_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let missing = InputSource::Schema(dir.path().join("missing.proto"));

        let err = run_generate(&options(dir.path(), missing, "echo")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTarget { .. }));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = InputSource::LegacyBinding(dir.path().join("error.pb.go"));

        let err = run_generate(&options(dir.path(), missing, "default")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_entries_to_json() {
        let json = entries_to_json(&[Entry::public(10001, "USER_NOT_FOUND", 404, "用户不存在")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["code"], 10001);
        assert_eq!(value[0]["http_status"], 404);
        assert_eq!(value[0]["http_message"], "用户不存在");
    }
}
