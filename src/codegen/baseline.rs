//! Framework-neutral target: types.go and errors_gen.go only.

use crate::codegen::errors_gen_go::{generate_errors_gen_go, ERRORS_GEN_GO};
use crate::codegen::generator::{validate_entries, Generator};
use crate::codegen::types::{GenerationConfig, OutputFile};
use crate::codegen::types_go::{generate_types_go, TypesFlavor, TYPES_GO};
use crate::entry::Entry;
use crate::error::Result;

pub const TARGET: &str = "default";

#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineGenerator;

impl Generator for BaselineGenerator {
    fn target(&self) -> &'static str {
        TARGET
    }

    fn generate(&self, config: &GenerationConfig, entries: &[Entry]) -> Result<Vec<OutputFile>> {
        common_files(config, entries, TypesFlavor::Plain)
    }
}

/// The two files every target starts with, in write order.
pub(crate) fn common_files(
    config: &GenerationConfig,
    entries: &[Entry],
    flavor: TypesFlavor,
) -> Result<Vec<OutputFile>> {
    let package = config.go_package()?;
    let default_message = config.require_default_message()?;
    validate_entries(entries)?;

    Ok(vec![
        OutputFile::new(TYPES_GO, generate_types_go(&package, flavor)?),
        OutputFile::new(
            ERRORS_GEN_GO,
            generate_errors_gen_go(&package, default_message, entries)?,
        ),
    ])
}
