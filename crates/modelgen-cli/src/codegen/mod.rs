//! C# model class generation from class descriptions.
//!
//! Given a [`ClassRegistry`](modelgen_core::ClassRegistry) and the name of one of
//! its classes, the generator renders a complete C# class with:
//!
//! - one public auto-property per discovered property
//! - a public parameterless constructor
//! - a protected constructor taking every property
//! - a public static `<Name>Factory` method calling the protected constructor
//!
//! # Pipeline
//!
//! ```text
//! C# sources
//!     ↓
//!  [discovery::scan]
//!     ↓
//!  ClassRegistry
//!     ↓
//!  [csharp::generate]
//!     ↓
//!  [sink::TextSink] → <Name>.cs
//! ```
//!
//! # Parameter naming
//!
//! The two generated signatures derive parameter names differently, see
//! [`naming`]:
//!
//! | Property | Constructor parameter | Factory parameter |
//! |----------|-----------------------|-------------------|
//! | `FirstName` | `firstname` | `firstName` |
//!
//! # Example
//!
//! ```rust
//! use modelgen_cli::codegen::generate;
//! use modelgen_core::{ClassDescriptor, ClassRegistry};
//!
//! let registry: ClassRegistry = [ClassDescriptor::new("Person")
//!     .with_property("Name", "string")
//!     .with_property("Age", "int")]
//! .into_iter()
//! .collect();
//!
//! let code = generate(&registry, "Person");
//! assert!(code.contains("public static Person PersonFactory("));
//!
//! // Unknown classes produce no output.
//! assert!(generate(&registry, "Missing").is_empty());
//! ```

pub mod csharp;
pub mod naming;

pub use csharp::{generate, generate_class, try_generate};
