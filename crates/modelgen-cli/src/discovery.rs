//! Discovery of class descriptions from a folder of C# sources.
//!
//! [`scan`] walks a folder recursively, parses every `.cs` file with
//! [`parse_source`] and collects the result into a [`ClassRegistry`].
//! Files are visited in file-name order so repeated scans of an unchanged
//! tree produce the same registry.

mod source;

pub use source::parse_source;

use modelgen_core::{ClassDescriptor, ClassRegistry, ModelGenError, ModelGenResult};
use source::{Declaration, parse_declarations};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Extension of the source files considered by [`scan`]
pub const SOURCE_EXTENSION: &str = "cs";

/// Build output folders that never contain model sources
const SKIPPED_DIRS: &[&str] = &["bin", "obj", ".git", ".vs"];

/// Scan `folder` recursively and build a registry of every class found.
///
/// When the same class name is declared more than once, the first declaration
/// in walk order wins and later ones are reported with a warning. The exception
/// is a `partial` type: later `partial` declarations in the same namespace add
/// their properties to it. Files that cannot be read are skipped.
pub fn scan(folder: &Path) -> ModelGenResult<ClassRegistry> {
    if !folder.is_dir() {
        return Err(ModelGenError::Discovery(format!(
            "not a directory: {}",
            folder.display()
        )));
    }

    let mut registry = ClassRegistry::new();
    let mut partial_names: HashSet<String> = HashSet::new();

    let walker = WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_source_extension(entry.path()) {
            continue;
        }

        let source = match std::fs::read_to_string(entry.path()) {
            Ok(source) => source,
            Err(err) => {
                warn!("Skipping {}: {err}", entry.path().display());
                continue;
            }
        };

        for Declaration { class, partial } in parse_declarations(&source) {
            if let Some(existing) = registry.get(&class.name) {
                if partial
                    && partial_names.contains(&class.name)
                    && existing.namespace == class.namespace
                {
                    debug!(
                        "Merging partial {} from {}",
                        class.name,
                        entry.path().display()
                    );
                    let merged = merge_partial(existing.clone(), class);
                    registry.insert(merged);
                } else {
                    warn!(
                        "Duplicate declaration of {} in {} ignored",
                        class.name,
                        entry.path().display()
                    );
                }
                continue;
            }
            if partial {
                partial_names.insert(class.name.clone());
            }
            debug!(
                "Discovered {} ({} properties) in {}",
                class.name,
                class.properties.len(),
                entry.path().display()
            );
            registry.insert(class);
        }
    }

    Ok(registry)
}

/// Append the properties of another `partial` part, skipping names already present.
fn merge_partial(mut class: ClassDescriptor, part: ClassDescriptor) -> ClassDescriptor {
    for property in part.properties {
        if !class.properties.iter().any(|p| p.name == property.name) {
            class.properties.push(property);
        }
    }
    class
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}
