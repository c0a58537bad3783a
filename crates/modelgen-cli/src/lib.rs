//! modelgen - C# model class generator
//!
//! Scans a folder of C# sources for classes and regenerates one of them as a
//! model class with a parameterless constructor, a protected constructor over
//! all properties and a static factory method.
//!
//! - [`discovery`] builds a [`ClassRegistry`](modelgen_core::ClassRegistry) from source files
//! - [`codegen`] renders a registry entry as C# source
//! - [`sink`] persists generated code
//! - [`command`] ties the three together for a host

pub mod codegen;
pub mod command;
pub mod discovery;
pub mod sink;

pub use command::GenerateModelCommand;
pub use sink::{FileSink, StdoutSink, TextSink};
