#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn FileSink___write___persists_text_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Person.cs");
    let text = "public class Person\n{\n}\n";

    FileSink::new().write(&path, text).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}

#[test]
fn FileSink___write_existing_file___overwrites_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Person.cs");
    fs::write(&path, "old content that is longer than the new one").unwrap();

    FileSink::new().write(&path, "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn FileSink___write_empty_text___creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Empty.cs");

    FileSink::new().write(&path, "").unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn FileSink___write_to_missing_directory___returns_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("Person.cs");

    let result = FileSink::new().write(&path, "text");

    match result {
        Err(ModelGenError::Io { path: failed, source }) => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn FileSink___write_to_directory_path___returns_io_error() {
    let dir = TempDir::new().unwrap();

    let result = FileSink::new().write(dir.path(), "text");

    assert!(matches!(result, Err(ModelGenError::Io { .. })));
}

#[test]
fn StdoutSink___write___succeeds() {
    let result = StdoutSink.write(Path::new("ignored.cs"), "");

    assert!(result.is_ok());
}
