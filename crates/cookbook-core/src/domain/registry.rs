//! The template registry index and its display form.
//!
//! The registry is a JSON document shipped alongside the templates:
//!
//! ```json
//! {
//!   "pipes":   { "pumpfun-tokens": { "description": "...", "tags": ["solana"] } },
//!   "modules": { "hono": { "description": "..." } }
//! }
//! ```
//!
//! It is optional. When the file is missing or malformed, the store degrades
//! to a directory listing and the resulting [`RegistryListing`] carries names
//! only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::template::TemplateKind;

/// Human-facing metadata for one registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemplateMeta {
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// The parsed registry index. Loaded once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub pipes: BTreeMap<String, TemplateMeta>,
    #[serde(default)]
    pub modules: BTreeMap<String, TemplateMeta>,
}

impl Registry {
    pub fn entries(&self, kind: TemplateKind) -> &BTreeMap<String, TemplateMeta> {
        match kind {
            TemplateKind::Pipe => &self.pipes,
            TemplateKind::Module => &self.modules,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty() && self.modules.is_empty()
    }
}

// ── Listing ───────────────────────────────────────────────────────────────────

/// Where a listing's data came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingSource {
    /// Parsed from `registry.json`.
    #[default]
    Index,
    /// Fallback: category directories were enumerated, no metadata available.
    DirectoryListing,
}

/// One template as shown by `list` and by the not-found candidate output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedTemplate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ListedTemplate {
    /// A name-only entry, as produced by the directory fallback.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tags: Vec::new(),
        }
    }
}

/// Everything the CLI needs to render the available templates.
///
/// Entries are name-sorted per category so output is deterministic across
/// runs regardless of how they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryListing {
    pub pipes: Vec<ListedTemplate>,
    pub modules: Vec<ListedTemplate>,
    #[serde(skip)]
    pub source: ListingSource,
}

impl RegistryListing {
    pub fn from_registry(registry: &Registry) -> Self {
        let to_listed = |entries: &BTreeMap<String, TemplateMeta>| {
            entries
                .iter()
                .map(|(name, meta)| ListedTemplate {
                    name: name.clone(),
                    description: Some(meta.description.clone()),
                    tags: meta.tags.clone(),
                })
                .collect()
        };

        Self {
            pipes: to_listed(&registry.pipes),
            modules: to_listed(&registry.modules),
            source: ListingSource::Index,
        }
    }

    /// Build from bare directory names (the fallback path).
    pub fn from_names(mut pipes: Vec<String>, mut modules: Vec<String>) -> Self {
        pipes.sort();
        modules.sort();
        Self {
            pipes: pipes.into_iter().map(ListedTemplate::bare).collect(),
            modules: modules.into_iter().map(ListedTemplate::bare).collect(),
            source: ListingSource::DirectoryListing,
        }
    }

    pub fn entries(&self, kind: TemplateKind) -> &[ListedTemplate] {
        match kind {
            TemplateKind::Pipe => &self.pipes,
            TemplateKind::Module => &self.modules,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty() && self.modules.is_empty()
    }
}
