//! Filesystem-backed template store.
//!
//! Discovers templates under an explicitly injected root directory:
//!
//! ```text
//! templates/
//! ├── registry.json        ← optional index with descriptions/tags
//! ├── pipes/
//! │   └── pumpfun-tokens/
//! │       ├── index.ts
//! │       └── dependencies.json
//! ├── modules/
//! │   └── hono/
//! └── base-project/        ← used by `init`, not part of either category
//! ```
//!
//! The root is a constructor argument — the store never guesses its location
//! from the process environment.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use cookbook_core::{
    application::ports::TemplateStore,
    domain::{Registry, RegistryListing, TemplateDependencies, TemplateDescriptor, TemplateKind},
    error::CookbookResult,
};
use cookbook_core::application::ApplicationError;
use cookbook_core::domain::DomainError;

/// Production template store reading a templates directory on disk.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    templates_root: PathBuf,
}

impl FsTemplateStore {
    /// Create a store rooted at `templates_root`.
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
        }
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Directory holding the `base-project` template used by `init`.
    pub fn base_project_dir(&self) -> PathBuf {
        self.templates_root.join("base-project")
    }

    fn category_dir(&self, kind: TemplateKind) -> PathBuf {
        self.templates_root.join(kind.dir_name())
    }

    fn registry_path(&self) -> PathBuf {
        self.templates_root.join("registry.json")
    }

    /// Fallback listing: enumerate category subdirectories, names only.
    fn listing_from_directories(&self) -> RegistryListing {
        let names_in = |kind: TemplateKind| -> Vec<String> {
            let dir = self.category_dir(kind);
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!(dir = %dir.display(), error = %e, "Category directory unreadable");
                    return Vec::new();
                }
            };
            entries
                .filter_map(Result::ok)
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect()
        };

        RegistryListing::from_names(names_in(TemplateKind::Pipe), names_in(TemplateKind::Module))
    }
}

impl TemplateStore for FsTemplateStore {
    fn locate(
        &self,
        name: &str,
        kind: Option<TemplateKind>,
    ) -> CookbookResult<TemplateDescriptor> {
        // A hint narrows the search to one category; otherwise pipes are
        // checked before modules and the first existing directory wins.
        let candidates: &[TemplateKind] = match kind {
            Some(ref hinted) => std::slice::from_ref(hinted),
            None => &TemplateKind::RESOLUTION_ORDER,
        };

        for &candidate in candidates {
            let dir = self.category_dir(candidate).join(name);
            if dir.is_dir() {
                debug!(kind = %candidate, dir = %dir.display(), "Template found");
                return Ok(TemplateDescriptor::new(name, candidate, dir));
            }
        }

        Err(DomainError::TemplateNotFound {
            name: name.to_string(),
        }
        .into())
    }

    fn listing(&self) -> RegistryListing {
        let registry_path = self.registry_path();
        let text = match fs::read_to_string(&registry_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %registry_path.display(), "No registry index; listing directories");
                return self.listing_from_directories();
            }
            Err(e) => {
                warn!(path = %registry_path.display(), error = %e, "Registry index unreadable; listing directories");
                return self.listing_from_directories();
            }
        };

        match serde_json::from_str::<Registry>(&text) {
            Ok(registry) => RegistryListing::from_registry(&registry),
            Err(e) => {
                warn!(path = %registry_path.display(), error = %e, "Registry index malformed; listing directories");
                self.listing_from_directories()
            }
        }
    }

    fn dependencies(
        &self,
        descriptor: &TemplateDescriptor,
    ) -> CookbookResult<Option<TemplateDependencies>> {
        let path = descriptor.dir().join("dependencies.json");
        if !path.is_file() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path).map_err(|e| ApplicationError::ManifestMerge {
            path: path.clone(),
            reason: format!("failed to read dependency declaration: {e}"),
        })?;
        let deps: TemplateDependencies =
            serde_json::from_str(&text).map_err(|e| ApplicationError::ManifestMerge {
                path,
                reason: format!("invalid dependency declaration: {e}"),
            })?;
        Ok(Some(deps))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_core::domain::ListingSource;
    use cookbook_core::error::CookbookError;
    use tempfile::TempDir;

    /// Lay out a templates root with the given template directories.
    fn templates_root(pipes: &[&str], modules: &[&str]) -> TempDir {
        let root = TempDir::new().unwrap();
        for name in pipes {
            fs::create_dir_all(root.path().join("pipes").join(name)).unwrap();
        }
        for name in modules {
            fs::create_dir_all(root.path().join("modules").join(name)).unwrap();
        }
        root
    }

    #[test]
    fn locate_finds_a_pipe_without_a_hint() {
        let root = templates_root(&["solana-swaps"], &[]);
        let store = FsTemplateStore::new(root.path());

        let d = store.locate("solana-swaps", None).unwrap();
        assert_eq!(d.kind(), TemplateKind::Pipe);
        assert_eq!(d.dir(), root.path().join("pipes/solana-swaps"));
    }

    #[test]
    fn locate_finds_a_module_without_a_hint() {
        let root = templates_root(&[], &["hono"]);
        let store = FsTemplateStore::new(root.path());

        let d = store.locate("hono", None).unwrap();
        assert_eq!(d.kind(), TemplateKind::Module);
    }

    #[test]
    fn name_in_both_categories_resolves_to_the_pipe() {
        let root = templates_root(&["dual"], &["dual"]);
        let store = FsTemplateStore::new(root.path());

        let d = store.locate("dual", None).unwrap();
        assert_eq!(d.kind(), TemplateKind::Pipe);
    }

    #[test]
    fn hint_restricts_the_search_to_one_category() {
        let root = templates_root(&["dual"], &["dual"]);
        let store = FsTemplateStore::new(root.path());

        let d = store.locate("dual", Some(TemplateKind::Module)).unwrap();
        assert_eq!(d.kind(), TemplateKind::Module);

        // A hint pointing at the wrong category is a miss, not a fallback.
        let root2 = templates_root(&["only-pipe"], &[]);
        let store2 = FsTemplateStore::new(root2.path());
        assert!(
            store2
                .locate("only-pipe", Some(TemplateKind::Module))
                .is_err()
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let root = templates_root(&["a"], &["b"]);
        let store = FsTemplateStore::new(root.path());

        let err = store.locate("missing", None).unwrap_err();
        assert!(matches!(
            err,
            CookbookError::Domain(DomainError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn listing_prefers_the_registry_index() {
        let root = templates_root(&["a-pipe"], &[]);
        fs::write(
            root.path().join("registry.json"),
            r#"{"pipes": {"a-pipe": {"description": "A", "tags": ["x"]}}, "modules": {}}"#,
        )
        .unwrap();
        let store = FsTemplateStore::new(root.path());

        let listing = store.listing();
        assert_eq!(listing.source, ListingSource::Index);
        assert_eq!(listing.pipes[0].description.as_deref(), Some("A"));
    }

    #[test]
    fn missing_index_falls_back_to_directories() {
        let root = templates_root(&["b-pipe", "a-pipe"], &["hono"]);
        let store = FsTemplateStore::new(root.path());

        let listing = store.listing();
        assert_eq!(listing.source, ListingSource::DirectoryListing);
        let names: Vec<_> = listing.pipes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a-pipe", "b-pipe"]);
        assert_eq!(listing.modules[0].name, "hono");
    }

    #[test]
    fn malformed_index_falls_back_without_error() {
        let root = templates_root(&["a-pipe"], &[]);
        fs::write(root.path().join("registry.json"), "{not valid json").unwrap();
        let store = FsTemplateStore::new(root.path());

        let listing = store.listing();
        assert_eq!(listing.source, ListingSource::DirectoryListing);
        assert_eq!(listing.pipes[0].name, "a-pipe");
    }

    #[test]
    fn listing_ignores_loose_files_in_category_dirs() {
        let root = templates_root(&["real"], &[]);
        fs::write(root.path().join("pipes/README.md"), "not a template").unwrap();
        let store = FsTemplateStore::new(root.path());

        let listing = store.listing();
        assert_eq!(listing.pipes.len(), 1);
    }

    #[test]
    fn dependencies_absent_is_a_noop() {
        let root = templates_root(&["plain"], &[]);
        let store = FsTemplateStore::new(root.path());
        let d = store.locate("plain", None).unwrap();

        assert!(store.dependencies(&d).unwrap().is_none());
    }

    #[test]
    fn dependencies_are_parsed_when_declared() {
        let root = templates_root(&["with-deps"], &[]);
        fs::write(
            root.path().join("pipes/with-deps/dependencies.json"),
            r#"{"dependencies": {"viem": "^2.0.0"}, "devDependencies": {"typescript": "^5"}}"#,
        )
        .unwrap();
        let store = FsTemplateStore::new(root.path());
        let d = store.locate("with-deps", None).unwrap();

        let deps = store.dependencies(&d).unwrap().unwrap();
        assert!(deps.dependencies.contains_key("viem"));
        assert!(deps.dev_dependencies.contains_key("typescript"));
    }

    #[test]
    fn malformed_dependency_declaration_is_an_error() {
        let root = templates_root(&["broken"], &[]);
        fs::write(root.path().join("pipes/broken/dependencies.json"), "nope").unwrap();
        let store = FsTemplateStore::new(root.path());
        let d = store.locate("broken", None).unwrap();

        assert!(store.dependencies(&d).is_err());
    }
}
