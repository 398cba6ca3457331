//! Target name → generator lookup.

use crate::codegen::baseline::{self, BaselineGenerator};
use crate::codegen::generator::Generator;
use crate::codegen::goframe::{self, GoFrameGenerator};
use crate::codegen::gozero::{self, GoZeroGenerator};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Target used when no name is given.
pub const DEFAULT_TARGET: &str = baseline::TARGET;

/// Registry of generators keyed by target name.
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Registry with the built-in `default`, `gozero` and `goframe` targets
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(baseline::TARGET, Box::new(BaselineGenerator));
        registry.register(gozero::TARGET, Box::new(GoZeroGenerator));
        registry.register(goframe::TARGET, Box::new(GoFrameGenerator));
        registry
    }

    /// Register a generator, replacing any previous one under `name`
    pub fn register(&mut self, name: impl Into<String>, generator: Box<dyn Generator>) {
        self.generators.insert(name.into(), generator);
    }

    /// Look up the generator for `target`. An empty name selects the default target.
    ///
    /// # Errors
    ///
    /// `UnsupportedTarget` listing every registered name when `target` is unknown.
    pub fn resolve(&self, target: &str) -> Result<&dyn Generator> {
        let name = if target.is_empty() { DEFAULT_TARGET } else { target };
        self.generators
            .get(name)
            .map(|g| g.as_ref())
            .ok_or_else(|| Error::UnsupportedTarget {
                name: target.to_string(),
                supported: self.targets(),
            })
    }

    pub fn has_target(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Registered target names, sorted
    pub fn targets(&self) -> Vec<String> {
        self.generators.keys().cloned().collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::types::{GenerationConfig, OutputFile};
    use crate::entry::Entry;

    struct EchoGenerator;

    impl Generator for EchoGenerator {
        fn target(&self) -> &'static str {
            "echo"
        }

        fn generate(&self, _config: &GenerationConfig, entries: &[Entry]) -> Result<Vec<OutputFile>> {
            Ok(entries
                .iter()
                .map(|e| OutputFile::new(format!("{}.txt", e.code), e.name.clone()))
                .collect())
        }
    }

    #[test]
    fn test_builtin_targets() {
        let registry = GeneratorRegistry::with_builtin();
        assert_eq!(registry.targets(), ["default", "goframe", "gozero"]);
        assert_eq!(registry.resolve("gozero").unwrap().target(), "gozero");
        assert_eq!(registry.resolve("goframe").unwrap().target(), "goframe");
        assert_eq!(registry.resolve("default").unwrap().target(), "default");
    }

    #[test]
    fn test_empty_name_resolves_default() {
        let registry = GeneratorRegistry::default();
        assert_eq!(registry.resolve("").unwrap().target(), DEFAULT_TARGET);
    }

    #[test]
    fn test_unknown_target() {
        let registry = GeneratorRegistry::with_builtin();
        match registry.resolve("gin") {
            Err(Error::UnsupportedTarget { name, supported }) => {
                assert_eq!(name, "gin");
                assert_eq!(supported, ["default", "goframe", "gozero"]);
            }
            other => panic!("expected UnsupportedTarget, got {:?}", other.map(|g| g.target())),
        }
        assert!(registry.resolve("GoZero").is_err());
    }

    #[test]
    fn test_register_custom_generator() {
        let mut registry = GeneratorRegistry::new();
        assert!(!registry.has_target("echo"));
        registry.register("echo", Box::new(EchoGenerator));
        assert!(registry.has_target("echo"));

        let config = GenerationConfig {
            package_name: "errorx".to_string(),
            import_path: String::new(),
            target_name: "echo".to_string(),
            default_internal_message: "busy".to_string(),
        };
        let files = registry
            .resolve("echo")
            .unwrap()
            .generate(&config, &[Entry::internal(7, "SEVEN", "")])
            .unwrap();
        assert_eq!(files, vec![OutputFile::new("7.txt", "SEVEN")]);

        // no default registered in an empty registry
        assert!(registry.resolve("").is_err());
    }
}
