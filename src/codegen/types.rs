//! Generation inputs and outputs.

use crate::codegen::utils::{go_package_name, is_go_identifier};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One generated file. `relative_path` is variant-defined; order within a
/// generation result is the intended write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub relative_path: String,
    pub content: String,
}

impl OutputFile {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// Final path component, used when writing into an output directory.
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.relative_path)
    }
}

/// Fully specified generation options.
///
/// No defaults are applied here; see
/// [`ProjectConfig`](crate::codegen::project_config::ProjectConfig) for the
/// defaulting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Module/package name the generated package clause is derived from
    pub package_name: String,

    /// Import path shown in the adapters' usage comment; may be empty
    pub import_path: String,

    /// Registry name of the generator variant
    pub target_name: String,

    /// Client-facing message for every internal entry
    pub default_internal_message: String,
}

impl GenerationConfig {
    /// Go package clause name, or a `Config` error if none can be derived.
    pub fn go_package(&self) -> Result<String> {
        let package = go_package_name(&self.package_name);
        if !is_go_identifier(&package) {
            return Err(Error::config(
                "package_name",
                format!(
                    "'{}' does not yield a valid Go package name (got '{}')",
                    self.package_name, package
                ),
            ));
        }
        Ok(package)
    }

    pub fn require_default_message(&self) -> Result<&str> {
        if self.default_internal_message.trim().is_empty() {
            return Err(Error::config(
                "default_internal_message",
                "must not be empty",
            ));
        }
        Ok(&self.default_internal_message)
    }
}
