//! Project configuration for generrorx.yaml
//!
//! Every field is optional. Values come from three layers, highest first:
//! command-line flags, the project file, built-in defaults. Defaults are
//! applied here, never inside the generators.
//!
//! ```yaml
//! package: myapp
//! import_path: myapp/errorcode
//! target: gozero
//! default_message: 服务繁忙
//! proto: ./error.proto
//! output: ./errorx
//! ```

use crate::codegen::orchestration::{GenOptions, InputSource};
use crate::codegen::registry::DEFAULT_TARGET;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const PROJECT_FILE: &str = "generrorx.yaml";

/// Schema path tried when no input is configured
pub const DEFAULT_SCHEMA_PATH: &str = "error.proto";

/// Compiled binding used when no input is configured and no schema exists
pub const DEFAULT_BINDING_PATH: &str = "errorcode/error.pb.go";

pub const DEFAULT_INTERNAL_MESSAGE: &str = "服务繁忙";

/// Suffix appended to the package name when no import path is given
const DEFAULT_IMPORT_SUFFIX: &str = "/errorcode";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub package: Option<String>,
    pub import_path: Option<String>,
    pub target: Option<String>,
    pub default_message: Option<String>,
    pub proto: Option<PathBuf>,
    pub pbfile: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load project configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml::from_str(&contents).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `generrorx.yaml` from `dir` if present
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Option<Self>> {
        let path = dir.as_ref().join(PROJECT_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "loading project config");
        Self::from_file(path).map(Some)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    ///
    /// An input given in `overrides` replaces both inputs of `self`, so a
    /// flag-selected `pbfile` is not shadowed by a file-selected `proto`.
    pub fn merge(self, overrides: ProjectConfig) -> ProjectConfig {
        let (proto, pbfile) = if overrides.proto.is_some() || overrides.pbfile.is_some() {
            (overrides.proto, overrides.pbfile)
        } else {
            (self.proto, self.pbfile)
        };

        ProjectConfig {
            package: overrides.package.or(self.package),
            import_path: overrides.import_path.or(self.import_path),
            target: overrides.target.or(self.target),
            default_message: overrides.default_message.or(self.default_message),
            proto,
            pbfile,
            output: overrides.output.or(self.output),
        }
    }

    /// Apply defaults and produce fully specified options.
    ///
    /// Relative paths are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// `Config` when no package name is set.
    pub fn into_gen_options(self, base_dir: &Path) -> Result<GenOptions> {
        let package_name = non_empty(self.package)
            .ok_or_else(|| Error::config("package", "required (use -m/--modelname or 'package:')"))?;

        let import_path = non_empty(self.import_path)
            .unwrap_or_else(|| format!("{}{}", package_name, DEFAULT_IMPORT_SUFFIX));

        let target = non_empty(self.target).unwrap_or_else(|| DEFAULT_TARGET.to_string());

        let default_message = non_empty(self.default_message)
            .unwrap_or_else(|| DEFAULT_INTERNAL_MESSAGE.to_string());

        let input = match (self.proto, self.pbfile) {
            (Some(proto), _) => InputSource::Schema(base_dir.join(proto)),
            (None, Some(pbfile)) => InputSource::LegacyBinding(base_dir.join(pbfile)),
            (None, None) => {
                let schema = base_dir.join(DEFAULT_SCHEMA_PATH);
                if schema.exists() {
                    InputSource::Schema(schema)
                } else {
                    InputSource::LegacyBinding(base_dir.join(DEFAULT_BINDING_PATH))
                }
            }
        };

        let output_dir = match self.output {
            Some(output) => base_dir.join(output),
            None => base_dir.to_path_buf(),
        };

        Ok(GenOptions {
            package_name,
            import_path,
            target,
            default_message,
            input,
            output_dir,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
