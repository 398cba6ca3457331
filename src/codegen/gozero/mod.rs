/// go-zero target
///
/// Adds handler.go, an `ErrorHandler` for `httpx.SetErrorHandlerCtx` that
/// logs internal causes through `logx.WithContext`.

use crate::codegen::baseline::common_files;
use crate::codegen::generator::Generator;
use crate::codegen::types::{GenerationConfig, OutputFile};
use crate::codegen::types_go::TypesFlavor;
use crate::entry::Entry;
use crate::error::Result;

mod handler_go;

pub use handler_go::{generate_handler_go, HANDLER_GO};

pub const TARGET: &str = "gozero";

#[derive(Debug, Clone, Copy, Default)]
pub struct GoZeroGenerator;

impl Generator for GoZeroGenerator {
    fn target(&self) -> &'static str {
        TARGET
    }

    fn generate(&self, config: &GenerationConfig, entries: &[Entry]) -> Result<Vec<OutputFile>> {
        let mut files = common_files(config, entries, TypesFlavor::Plain)?;

        let package = config.go_package()?;
        files.push(OutputFile::new(
            HANDLER_GO,
            generate_handler_go(&package, config.import_path.trim())?,
        ));

        Ok(files)
    }
}
