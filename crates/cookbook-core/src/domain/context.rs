//! Placeholder substitution context.
//!
//! This is literal token replacement (`{{token}}` → value), not a templating
//! language. Tokens with no entry in the context stay in the output verbatim.

use std::collections::BTreeMap;

/// Variables applied to template files during materialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderContext {
    vars: BTreeMap<String, String>,
}

impl PlaceholderContext {
    /// Context seeded with the standard `projectName` variable.
    pub fn new(project_name: impl Into<String>) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("projectName".to_string(), project_name.into());
        Self { vars }
    }

    /// Context with no variables at all. Materializing with this still strips
    /// `.template` suffixes but leaves every token untouched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a custom variable (builder style).
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Replace every `{{key}}` occurrence for every known key.
    pub fn render(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (key, value) in &self.vars {
            let token = format!("{{{{{key}}}}}");
            out = out.replace(&token, value);
        }
        out
    }
}
