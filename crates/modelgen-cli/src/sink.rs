//! Destinations for generated code

use modelgen_core::{ModelGenError, ModelGenResult};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info};

/// Receives generated text for a location
pub trait TextSink {
    /// Persist `text` for `location`.
    ///
    /// Failures are logged by the sink and returned to the caller; sinks never
    /// panic and never retry.
    fn write(&self, location: &Path, text: &str) -> ModelGenResult<()>;
}

/// Writes generated code to files, replacing existing content
///
/// Parent directories are not created: a missing directory is reported as an
/// I/O error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl FileSink {
    pub fn new() -> Self {
        Self
    }
}

impl TextSink for FileSink {
    fn write(&self, location: &Path, text: &str) -> ModelGenResult<()> {
        match write_file(location, text) {
            Ok(()) => {
                info!("Class code saved to {}", location.display());
                Ok(())
            }
            Err(err) => {
                error!("Error saving class code to {}: {err}", location.display());
                Err(ModelGenError::io(location, err))
            }
        }
    }
}

/// The handle is dropped on every return path, including errors.
fn write_file(location: &Path, text: &str) -> io::Result<()> {
    let mut file = File::create(location)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}

/// Prints generated code to standard output, ignoring the location
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn write(&self, location: &Path, text: &str) -> ModelGenResult<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|err| {
                error!("Error printing class code: {err}");
                ModelGenError::io(location, err)
            })
    }
}

#[cfg(test)]
#[path = "sink/sink_tests.rs"]
mod sink_tests;
