//! JSON manifest persistence for `package.json`.

use std::fs;
use std::path::Path;

use cookbook_core::{
    application::{ApplicationError, ports::ManifestStore},
    domain::ProjectManifest,
    error::CookbookResult,
};

/// Reads and writes the project manifest with deterministic formatting:
/// 2-space indentation, insertion order preserved, trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestStore;

impl JsonManifestStore {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestStore for JsonManifestStore {
    fn load(&self, path: &Path) -> CookbookResult<ProjectManifest> {
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::ManifestMerge {
            path: path.to_path_buf(),
            reason: format!("failed to read: {e}"),
        })?;
        Ok(ProjectManifest::parse(&text)?)
    }

    fn save(&self, path: &Path, manifest: &ProjectManifest) -> CookbookResult<()> {
        fs::write(path, manifest.to_pretty_string()).map_err(|e| {
            ApplicationError::ManifestMerge {
                path: path.to_path_buf(),
                reason: format!("failed to write: {e}"),
            }
            .into()
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
