#![allow(non_snake_case)]

use super::*;
use modelgen_core::ClassDescriptor;
use std::cell::RefCell;
use tempfile::TempDir;

/// Records writes instead of touching the file system.
#[derive(Default)]
struct MemorySink {
    writes: RefCell<Vec<(PathBuf, String)>>,
}

impl TextSink for MemorySink {
    fn write(&self, location: &Path, text: &str) -> ModelGenResult<()> {
        self.writes
            .borrow_mut()
            .push((location.to_path_buf(), text.to_string()));
        Ok(())
    }
}

/// Fails every write the way a read-only destination would.
struct FailingSink;

impl TextSink for FailingSink {
    fn write(&self, location: &Path, _text: &str) -> ModelGenResult<()> {
        Err(ModelGenError::io(
            location,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}

fn registry() -> ClassRegistry {
    [ClassDescriptor::new("Person")
        .with_property("Name", "string")
        .with_property("Age", "int")]
    .into_iter()
    .collect()
}

#[test]
fn GenerateModelCommand___execute___writes_to_class_file_in_folder() {
    let dir = TempDir::new().unwrap();
    let registry = registry();
    let sink = MemorySink::default();
    let command = GenerateModelCommand::new(&registry, &sink, &GeneratorConfig::default());

    let written = command.execute(dir.path(), "Person", None).unwrap();

    assert_eq!(written, dir.path().join("Person.cs"));
    let writes = sink.writes.borrow();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, written);
    assert!(writes[0].1.starts_with("public class Person\n"));
}

#[test]
fn GenerateModelCommand___execute_with_out___uses_explicit_destination() {
    let dir = TempDir::new().unwrap();
    let registry = registry();
    let sink = MemorySink::default();
    let command = GenerateModelCommand::new(&registry, &sink, &GeneratorConfig::default());
    let out = dir.path().join("generated").join("PersonModel.cs");

    let written = command.execute(dir.path(), "Person", Some(&out)).unwrap();

    assert_eq!(written, out);
}

#[test]
fn GenerateModelCommand___configured_extension___is_used_for_output_path() {
    let registry = registry();
    let sink = MemorySink::default();
    let config = GeneratorConfig {
        file_extension: ".g.cs".to_string(),
        ..GeneratorConfig::default()
    };
    let command = GenerateModelCommand::new(&registry, &sink, &config);

    let path = command.output_path(Path::new("/src/models"), "Person");

    assert_eq!(path, PathBuf::from("/src/models/Person.g.cs"));
}

#[test]
fn GenerateModelCommand___unknown_class___returns_class_not_found_without_writing() {
    let dir = TempDir::new().unwrap();
    let registry = registry();
    let sink = MemorySink::default();
    let command = GenerateModelCommand::new(&registry, &sink, &GeneratorConfig::default());

    let result = command.execute(dir.path(), "Customer", None);

    assert!(matches!(result, Err(ModelGenError::ClassNotFound(_))));
    assert!(sink.writes.borrow().is_empty());
}

#[test]
fn GenerateModelCommand___missing_folder___returns_invalid_selection() {
    let dir = TempDir::new().unwrap();
    let registry = registry();
    let sink = MemorySink::default();
    let command = GenerateModelCommand::new(&registry, &sink, &GeneratorConfig::default());

    let result = command.execute(&dir.path().join("missing"), "Person", None);

    assert!(matches!(result, Err(ModelGenError::InvalidSelection(_))));
    assert!(sink.writes.borrow().is_empty());
}

#[test]
fn GenerateModelCommand___sink_failure___is_returned_to_caller() {
    let dir = TempDir::new().unwrap();
    let registry = registry();
    let command = GenerateModelCommand::new(&registry, &FailingSink, &GeneratorConfig::default());

    let result = command.execute(dir.path(), "Person", None);

    assert!(matches!(result, Err(ModelGenError::Io { .. })));
}

#[test]
fn validate_selection___blank_class_name___is_rejected() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
        validate_selection(dir.path(), ""),
        Err(ModelGenError::InvalidSelection(_))
    ));
    assert!(matches!(
        validate_selection(dir.path(), "   "),
        Err(ModelGenError::InvalidSelection(_))
    ));
}

#[test]
fn validate_selection___existing_folder_and_name___is_accepted() {
    let dir = TempDir::new().unwrap();

    assert!(validate_selection(dir.path(), "Person").is_ok());
}
