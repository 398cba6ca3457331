/// GoFrame target
///
/// types.go gains `ToGError()`; middleware.go adds `ErrorMiddleware`, which
/// maps any handler error onto the JSON body of its code.

use crate::codegen::baseline::common_files;
use crate::codegen::generator::Generator;
use crate::codegen::types::{GenerationConfig, OutputFile};
use crate::codegen::types_go::TypesFlavor;
use crate::entry::Entry;
use crate::error::Result;

mod middleware_go;

pub use middleware_go::{generate_middleware_go, MIDDLEWARE_GO};

pub const TARGET: &str = "goframe";

#[derive(Debug, Clone, Copy, Default)]
pub struct GoFrameGenerator;

impl Generator for GoFrameGenerator {
    fn target(&self) -> &'static str {
        TARGET
    }

    fn generate(&self, config: &GenerationConfig, entries: &[Entry]) -> Result<Vec<OutputFile>> {
        let mut files = common_files(config, entries, TypesFlavor::GoFrame)?;

        let package = config.go_package()?;
        files.push(OutputFile::new(
            MIDDLEWARE_GO,
            generate_middleware_go(&package, config.import_path.trim())?,
        ));

        Ok(files)
    }
}
