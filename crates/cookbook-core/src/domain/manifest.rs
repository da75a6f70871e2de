//! The project manifest (`package.json`) and the dependency merge.
//!
//! The merge is shallow and additive: an incoming key overwrites an existing
//! key of the same name, every other existing entry is untouched, and nothing
//! is ever deleted. `serde_json` is built with `preserve_order`, so a
//! rewritten manifest keeps the author's key order and stays human-diffable;
//! for unchanged input the output is byte-identical across runs.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::DomainError;

/// Package name → version specifier, as found in `package.json` sections.
pub type DependencyMap = Map<String, Value>;

/// A template's declared dependency sets (`dependencies.json`).
///
/// Both sets are optional; a template that only ships code declares neither.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemplateDependencies {
    #[serde(default)]
    pub dependencies: DependencyMap,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: DependencyMap,
}

impl TemplateDependencies {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

/// The consuming project's `package.json`, held as a JSON object.
///
/// Only the two dependency sections are ever mutated; everything else rides
/// along untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectManifest {
    root: Map<String, Value>,
}

impl ProjectManifest {
    /// Parse manifest text. Anything but a top-level JSON object is rejected.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(text).map_err(|e| DomainError::ManifestInvalid {
            reason: e.to_string(),
        })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DomainError::ManifestInvalid {
                reason: format!("expected a JSON object, found {}", json_type_name(&other)),
            }),
        }
    }

    /// Merge a template's declared dependencies into this manifest.
    ///
    /// Returns `true` if any entry was added or changed.
    pub fn merge(&mut self, incoming: &TemplateDependencies) -> bool {
        let mut changed = false;
        changed |= self.merge_set("dependencies", &incoming.dependencies);
        changed |= self.merge_set("devDependencies", &incoming.dev_dependencies);
        changed
    }

    fn merge_set(&mut self, section: &str, incoming: &DependencyMap) -> bool {
        if incoming.is_empty() {
            return false;
        }

        let entry = self
            .root
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        // A malformed section (e.g. `"dependencies": []`) is replaced rather
        // than merged into.
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let existing = entry.as_object_mut().expect("section is an object");

        let mut changed = false;
        for (name, version) in incoming {
            if existing.get(name) != Some(version) {
                existing.insert(name.clone(), version.clone());
                changed = true;
            }
        }
        changed
    }

    /// A dependency section, if present and well-formed.
    pub fn dependency_set(&self, section: &str) -> Option<&DependencyMap> {
        self.root.get(section).and_then(Value::as_object)
    }

    /// Any top-level manifest field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Deterministic pretty-print: 2-space indentation, trailing newline.
    pub fn to_pretty_string(&self) -> String {
        let mut text = serde_json::to_string_pretty(&Value::Object(self.root.clone()))
            .expect("manifest maps serialize without error");
        text.push('\n');
        text
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
