//! Go code generation for error codes.
//!
//! Each target implements [`Generator`] and is looked up by name through
//! [`GeneratorRegistry`]:
//!
//! | target    | files                                         |
//! |-----------|-----------------------------------------------|
//! | `default` | `types.go`, `errors_gen.go`                   |
//! | `gozero`  | `types.go`, `errors_gen.go`, `handler.go`     |
//! | `goframe` | `types.go`, `errors_gen.go`, `middleware.go`  |

pub mod types;
pub mod utils;
pub mod generator;
pub mod registry;
pub mod types_go;
pub mod errors_gen_go;
pub mod baseline;
pub mod gozero;
pub mod goframe;
pub mod fs_utils;
pub mod project_config;
pub mod orchestration;
pub mod scaffold;

// Re-export key types
pub use types::{GenerationConfig, OutputFile};
pub use generator::Generator;
pub use registry::{GeneratorRegistry, DEFAULT_TARGET};
pub use baseline::BaselineGenerator;
pub use gozero::GoZeroGenerator;
pub use goframe::GoFrameGenerator;
pub use project_config::ProjectConfig;
pub use orchestration::{run_generate, GenOptions, GenerationReport, InputSource};

/// Resolve `config.target_name` in the built-in registry and generate.
///
/// # Example
///
/// ```
/// use generrorx::codegen::{generate, GenerationConfig};
/// use generrorx::parser::parse_schema_str;
///
/// let entries = parse_schema_str("enum ErrorCode {\n  NOT_FOUND = 1; // missing @http=404\n}\n");
/// let config = GenerationConfig {
///     package_name: "errorx".to_string(),
///     import_path: "myapp/errorx".to_string(),
///     target_name: "default".to_string(),
///     default_internal_message: "service busy".to_string(),
/// };
/// let files = generate(&config, &entries).unwrap();
/// assert_eq!(files.len(), 2);
/// ```
pub fn generate(config: &GenerationConfig, entries: &[crate::entry::Entry]) -> crate::error::Result<Vec<OutputFile>> {
    GeneratorRegistry::with_builtin()
        .resolve(&config.target_name)?
        .generate(config, entries)
}
