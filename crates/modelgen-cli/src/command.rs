//! The generate-model command: selection checks, generation and output.

use crate::codegen::try_generate;
use crate::sink::TextSink;
use modelgen_core::{ClassRegistry, GeneratorConfig, ModelGenError, ModelGenResult};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Generates one model class and hands it to a [`TextSink`].
///
/// The registry and the sink are borrowed for the lifetime of the command, so a
/// host builds both per invocation and drops them afterwards.
pub struct GenerateModelCommand<'a, S: TextSink> {
    registry: &'a ClassRegistry,
    sink: &'a S,
    extension: String,
}

impl<'a, S: TextSink> GenerateModelCommand<'a, S> {
    pub fn new(registry: &'a ClassRegistry, sink: &'a S, config: &GeneratorConfig) -> Self {
        Self {
            registry,
            sink,
            extension: config.extension().to_string(),
        }
    }

    /// Default destination: `<folder>/<class>.<extension>`
    pub fn output_path(&self, folder: &Path, class_name: &str) -> PathBuf {
        folder.join(format!("{}.{}", class_name, self.extension))
    }

    /// Generate `class_name` and write it to `out`, or to [`Self::output_path`]
    /// when no explicit destination is given.
    ///
    /// Returns the location that was written.
    pub fn execute(
        &self,
        folder: &Path,
        class_name: &str,
        out: Option<&Path>,
    ) -> ModelGenResult<PathBuf> {
        validate_selection(folder, class_name)?;

        let code = try_generate(self.registry, class_name)?;
        let location = out
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output_path(folder, class_name));

        info!("Generating {} into {}", class_name, location.display());
        self.sink.write(&location, &code)?;

        Ok(location)
    }
}

/// Reject selections the host must not pass to the generator.
pub fn validate_selection(folder: &Path, class_name: &str) -> ModelGenResult<()> {
    if !folder.is_dir() {
        warn!("Select a valid folder: {}", folder.display());
        return Err(ModelGenError::InvalidSelection(format!(
            "not a directory: {}",
            folder.display()
        )));
    }

    if class_name.trim().is_empty() {
        warn!("No class selected");
        return Err(ModelGenError::InvalidSelection(
            "class name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "command/command_tests.rs"]
mod command_tests;
