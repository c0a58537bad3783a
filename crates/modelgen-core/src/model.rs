//! Class descriptions produced by discovery and consumed by the generator

use crate::{ModelGenError, ModelGenResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property of a discovered class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name, conventionally PascalCase.
    pub name: String,

    /// Type name, copied verbatim into generated code.
    #[serde(rename = "type")]
    pub ty: String,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A discovered class (or enum) and its properties.
///
/// `properties` keeps declaration order; the generator relies on it for member,
/// constructor parameter and factory argument order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Class name, also the registry key.
    pub name: String,

    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,

    /// Whether the declaration is an enum.
    #[serde(default)]
    pub is_enum: bool,

    /// Enum member names in declaration order.
    #[serde(default)]
    pub enum_values: Vec<String>,

    /// Enclosing namespace, empty when declared at global scope.
    #[serde(default)]
    pub namespace: String,
}

impl ClassDescriptor {
    /// Create a class description without properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an enum description
    pub fn enumeration(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            is_enum: true,
            enum_values: values,
            ..Self::default()
        }
    }

    /// Append a property
    pub fn with_property(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.properties.push(PropertyDescriptor::new(name, ty));
        self
    }

    /// Set the enclosing namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// Name-keyed collection of class descriptions available for one run.
///
/// Keys always equal the `name` of the stored descriptor: entries can only be
/// added through [`ClassRegistry::insert`], and deserialization rejects
/// documents that break the rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ClassDescriptor>",
    into = "BTreeMap<String, ClassDescriptor>"
)]
pub struct ClassRegistry {
    classes: BTreeMap<String, ClassDescriptor>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor under its own name, returning any replaced entry
    pub fn insert(&mut self, class: ClassDescriptor) -> Option<ClassDescriptor> {
        self.classes.insert(class.name.clone(), class)
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Class names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Descriptors in name order
    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Parse a registry from its JSON form
    pub fn from_json(json: &str) -> ModelGenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the registry as pretty-printed JSON
    pub fn to_json_pretty(&self) -> ModelGenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<BTreeMap<String, ClassDescriptor>> for ClassRegistry {
    type Error = ModelGenError;

    fn try_from(classes: BTreeMap<String, ClassDescriptor>) -> Result<Self, Self::Error> {
        if let Some((key, class)) = classes.iter().find(|(key, class)| **key != class.name) {
            return Err(ModelGenError::Registry(format!(
                "key '{key}' does not match class name '{}'",
                class.name
            )));
        }
        Ok(Self { classes })
    }
}

impl From<ClassRegistry> for BTreeMap<String, ClassDescriptor> {
    fn from(registry: ClassRegistry) -> Self {
        registry.classes
    }
}

impl FromIterator<ClassDescriptor> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = ClassDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for class in iter {
            registry.insert(class);
        }
        registry
    }
}
