//! Filesystem utilities for writing generated files

use crate::codegen::types::OutputFile;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write content to a file, creating parent directories if needed
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Write every file flat into `output_dir`, keyed by file name, in order.
pub fn write_outputs(output_dir: &Path, files: &[OutputFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = output_dir.join(file.file_name());
        write_file(&path, &file.content)?;
        tracing::info!(path = %path.display(), bytes = file.content.len(), "wrote generated file");
        written.push(path);
    }

    Ok(written)
}
