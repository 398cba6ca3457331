//! Crate-wide error type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An input source could not be read or an output could not be written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported target '{name}' (supported: {})", .supported.join(", "))]
    UnsupportedTarget { name: String, supported: Vec<String> },

    #[error("invalid configuration: {field}: {reason}")]
    Config { field: &'static str, reason: String },

    #[error("cannot render generated code: {0}")]
    Render(String),

    #[error("failed to parse project config {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema compiler failed: {0}")]
    Compiler(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Config {
            field,
            reason: reason.into(),
        }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Error::Render("formatter error while writing generated source".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_target_lists_names() {
        let err = Error::UnsupportedTarget {
            name: "gin".to_string(),
            supported: vec!["default".to_string(), "gozero".to_string(), "goframe".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'gin'"));
        assert!(msg.contains("default, gozero, goframe"));
    }

    #[test]
    fn test_config_error_names_field() {
        let err = Error::config("default_internal_message", "must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid configuration: default_internal_message: must not be empty"
        );
    }
}
