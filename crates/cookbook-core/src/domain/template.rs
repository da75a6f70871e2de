//! Template identity and destination resolution.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::DomainError;

/// The two template categories Cookbook knows about.
///
/// A *pipe* is a data-ingestion unit; a *module* is a general-purpose project
/// addition such as an API server. Each category maps to its own directory
/// under the templates root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Pipe,
    Module,
}

impl TemplateKind {
    /// Categories in locate order. Pipes are checked before modules when no
    /// category hint is given; a name present in both resolves to the pipe.
    pub const RESOLUTION_ORDER: [TemplateKind; 2] = [TemplateKind::Pipe, TemplateKind::Module];

    /// Directory name for this category under the templates root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Pipe => "pipes",
            Self::Module => "modules",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipe => write!(f, "pipe"),
            Self::Module => write!(f, "module"),
        }
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pipe" => Ok(Self::Pipe),
            "module" => Ok(Self::Module),
            other => Err(DomainError::UnknownKind {
                value: other.to_string(),
            }),
        }
    }
}

// ── Destination overrides ─────────────────────────────────────────────────────

/// Module names that install somewhere other than the generic
/// `src/modules/<name>` directory.
///
/// Kept as a lookup table so future special cases are data, not control flow.
/// Currently only the Hono API server, which owns `src/api/` in a scaffolded
/// indexer project.
const DEST_OVERRIDES: &[(&str, &str)] = &[("hono", "src/api")];

fn module_override(name: &str) -> Option<&'static str> {
    DEST_OVERRIDES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, dest)| *dest)
}

// ── Descriptor ────────────────────────────────────────────────────────────────

/// A located template: identity plus its on-disk source directory.
///
/// Descriptors are ephemeral — reconstructed from the filesystem on every
/// invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    name: String,
    kind: TemplateKind,
    dir: PathBuf,
}

impl TemplateDescriptor {
    pub fn new(name: impl Into<String>, kind: TemplateKind, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind,
            dir: dir.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The template's source directory under the templates root.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where this template's files land inside the consuming project.
    ///
    /// Pipes always install under `src/pipes/<name>`. Modules install under
    /// `src/modules/<name>` unless the name appears in the override table.
    pub fn destination(&self, project_root: &Path) -> PathBuf {
        match self.kind {
            TemplateKind::Pipe => project_root.join("src/pipes").join(&self.name),
            TemplateKind::Module => match module_override(&self.name) {
                Some(dest) => project_root.join(dest),
                None => project_root.join("src/modules").join(&self.name),
            },
        }
    }
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.name)
    }
}
