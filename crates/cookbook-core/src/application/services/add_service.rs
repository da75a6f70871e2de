//! Add Service - the main application orchestrator.
//!
//! Coordinates the whole `add` workflow:
//! 1. Locate the template (pipe first, then module, unless a hint narrows it)
//! 2. Materialize its files into the project
//! 3. Merge its declared dependencies into the project manifest
//! 4. Trigger the package-manager install
//!
//! Each step is gated on the one before it, but a merge or install failure
//! never rolls the copy back: the report carries those outcomes so the caller
//! can warn instead of failing the whole operation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{
        InstallError, Installer, ManifestStore, MaterializeStats, Materializer, TemplateStore,
    },
    domain::{PlaceholderContext, RegistryListing, TemplateDescriptor, TemplateKind},
    error::{CookbookError, CookbookResult},
};

/// What happened to the project manifest during an add.
#[derive(Debug, Clone)]
pub enum MergeOutcome {
    /// The template declares no dependency file; nothing to do.
    NoDependencies,
    /// Dependencies were merged and the manifest written back.
    Merged,
    /// The manifest could not be read or written. The template's files are
    /// already in place and stay there.
    Failed(CookbookError),
}

/// What happened to the install trigger.
#[derive(Debug, Clone)]
pub enum InstallOutcome {
    /// No dependencies were merged, so no install was attempted.
    NotAttempted,
    /// The caller asked to skip the install.
    Skipped,
    /// The external installer exited successfully.
    Completed,
    /// The external installer failed or could not be spawned. Advisory only.
    Failed(InstallError),
}

/// Result of a completed add operation.
#[derive(Debug, Clone)]
pub struct AddReport {
    pub descriptor: TemplateDescriptor,
    pub destination: PathBuf,
    pub stats: MaterializeStats,
    pub merge: MergeOutcome,
    pub install: InstallOutcome,
}

/// Main add-template service.
pub struct AddService {
    store: Box<dyn TemplateStore>,
    materializer: Box<dyn Materializer>,
    manifests: Box<dyn ManifestStore>,
    installer: Box<dyn Installer>,
}

impl AddService {
    /// Create a new add service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        materializer: Box<dyn Materializer>,
        manifests: Box<dyn ManifestStore>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            store,
            materializer,
            manifests,
            installer,
        }
    }

    /// Add a template to the project at `project_root`.
    ///
    /// Returns an error only for the fatal steps (locate, materialize).
    /// Merge and install failures are folded into the report.
    #[instrument(skip_all, fields(template = %name))]
    pub fn add(
        &self,
        name: &str,
        kind: Option<TemplateKind>,
        project_root: &Path,
        skip_install: bool,
    ) -> CookbookResult<AddReport> {
        // 1. Locate
        let descriptor = self.store.locate(name, kind)?;
        info!(%descriptor, dir = %descriptor.dir().display(), "Template located");

        // 2. Materialize. Add-flow templates are copied as-is; an empty
        // context still strips `.template` markers but substitutes nothing.
        let destination = descriptor.destination(project_root);
        let stats = self.materializer.materialize(
            descriptor.dir(),
            &destination,
            &PlaceholderContext::empty(),
        )?;
        info!(
            files = stats.files_written(),
            dest = %destination.display(),
            "Template materialized"
        );

        // 3. Merge dependencies
        let merge = self.merge_dependencies(&descriptor, project_root);

        // 4. Install trigger, gated on a successful merge
        let install = match &merge {
            MergeOutcome::Merged if skip_install => InstallOutcome::Skipped,
            MergeOutcome::Merged => self.run_installer(project_root),
            MergeOutcome::NoDependencies | MergeOutcome::Failed(_) => InstallOutcome::NotAttempted,
        };

        Ok(AddReport {
            descriptor,
            destination,
            stats,
            merge,
            install,
        })
    }

    /// Everything the store knows about, for not-found candidate output.
    pub fn available(&self) -> RegistryListing {
        self.store.listing()
    }

    fn merge_dependencies(
        &self,
        descriptor: &TemplateDescriptor,
        project_root: &Path,
    ) -> MergeOutcome {
        let incoming = match self.store.dependencies(descriptor) {
            Ok(Some(deps)) if !deps.is_empty() => deps,
            Ok(_) => {
                debug!("Template declares no dependencies");
                return MergeOutcome::NoDependencies;
            }
            Err(e) => return MergeOutcome::Failed(e),
        };

        let manifest_path = project_root.join("package.json");
        let result = self
            .manifests
            .load(&manifest_path)
            .and_then(|mut manifest| {
                let changed = manifest.merge(&incoming);
                debug!(changed, "Dependencies merged");
                self.manifests.save(&manifest_path, &manifest)
            });

        match result {
            Ok(()) => MergeOutcome::Merged,
            Err(e) => {
                warn!(error = %e, "Dependency merge failed; template files remain in place");
                MergeOutcome::Failed(e)
            }
        }
    }

    fn run_installer(&self, project_root: &Path) -> InstallOutcome {
        match self.installer.install(project_root) {
            Ok(()) => InstallOutcome::Completed,
            Err(e) => {
                warn!(error = %e, "Install failed; continuing");
                InstallOutcome::Failed(e)
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MaterializeStats;
    use crate::domain::{DomainError, ProjectManifest, TemplateDependencies};
    use crate::error::CookbookError;
    use crate::application::ApplicationError;

    use mockall::mock;

    mock! {
        Store {}
        impl TemplateStore for Store {
            fn locate(&self, name: &str, kind: Option<TemplateKind>) -> CookbookResult<TemplateDescriptor>;
            fn listing(&self) -> RegistryListing;
            fn dependencies(&self, descriptor: &TemplateDescriptor) -> CookbookResult<Option<TemplateDependencies>>;
        }
    }

    mock! {
        Copier {}
        impl Materializer for Copier {
            fn materialize(&self, source: &Path, dest: &Path, context: &PlaceholderContext) -> CookbookResult<MaterializeStats>;
        }
    }

    mock! {
        Manifests {}
        impl ManifestStore for Manifests {
            fn load(&self, path: &Path) -> CookbookResult<ProjectManifest>;
            fn save(&self, path: &Path, manifest: &ProjectManifest) -> CookbookResult<()>;
        }
    }

    mock! {
        Inst {}
        impl Installer for Inst {
            fn install(&self, project_dir: &Path) -> Result<(), InstallError>;
        }
    }

    fn pipe_descriptor() -> TemplateDescriptor {
        TemplateDescriptor::new(
            "pumpfun-tokens",
            TemplateKind::Pipe,
            "/templates/pipes/pumpfun-tokens",
        )
    }

    fn some_deps() -> TemplateDependencies {
        serde_json::from_str(r#"{"dependencies": {"hono": "^4.0.0"}}"#).unwrap()
    }

    fn service(
        store: MockStore,
        copier: MockCopier,
        manifests: MockManifests,
        installer: MockInst,
    ) -> AddService {
        AddService::new(
            Box::new(store),
            Box::new(copier),
            Box::new(manifests),
            Box::new(installer),
        )
    }

    #[test]
    fn add_copies_merges_and_installs() {
        let mut store = MockStore::new();
        store
            .expect_locate()
            .withf(|name, kind| name == "pumpfun-tokens" && kind.is_none())
            .returning(|_, _| Ok(pipe_descriptor()));
        store
            .expect_dependencies()
            .returning(|_| Ok(Some(some_deps())));

        let mut copier = MockCopier::new();
        copier
            .expect_materialize()
            .withf(|src, dest, ctx| {
                src == Path::new("/templates/pipes/pumpfun-tokens")
                    && dest == Path::new("/proj/src/pipes/pumpfun-tokens")
                    && ctx.is_empty()
            })
            .returning(|_, _, _| {
                Ok(MaterializeStats {
                    files_copied: 3,
                    files_rendered: 0,
                    dirs_created: 1,
                })
            });

        let mut manifests = MockManifests::new();
        manifests
            .expect_load()
            .withf(|p| p == Path::new("/proj/package.json"))
            .returning(|_| Ok(ProjectManifest::parse(r#"{"dependencies": {}}"#).unwrap()));
        manifests
            .expect_save()
            .withf(|_, m| m.dependency_set("dependencies").unwrap().contains_key("hono"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut installer = MockInst::new();
        installer
            .expect_install()
            .withf(|dir| dir == Path::new("/proj"))
            .times(1)
            .returning(|_| Ok(()));

        let report = service(store, copier, manifests, installer)
            .add("pumpfun-tokens", None, Path::new("/proj"), false)
            .unwrap();

        assert_eq!(report.stats.files_written(), 3);
        assert!(matches!(report.merge, MergeOutcome::Merged));
        assert!(matches!(report.install, InstallOutcome::Completed));
    }

    #[test]
    fn template_without_dependency_file_skips_merge_and_install() {
        let mut store = MockStore::new();
        store.expect_locate().returning(|_, _| Ok(pipe_descriptor()));
        store.expect_dependencies().returning(|_| Ok(None));

        let mut copier = MockCopier::new();
        copier
            .expect_materialize()
            .returning(|_, _, _| Ok(MaterializeStats::default()));

        let mut manifests = MockManifests::new();
        manifests.expect_load().times(0);
        manifests.expect_save().times(0);

        let mut installer = MockInst::new();
        installer.expect_install().times(0);

        let report = service(store, copier, manifests, installer)
            .add("pumpfun-tokens", None, Path::new("/proj"), false)
            .unwrap();

        assert!(matches!(report.merge, MergeOutcome::NoDependencies));
        assert!(matches!(report.install, InstallOutcome::NotAttempted));
    }

    #[test]
    fn locate_failure_stops_before_materialization() {
        let mut store = MockStore::new();
        store.expect_locate().returning(|name, _| {
            Err(DomainError::TemplateNotFound {
                name: name.to_string(),
            }
            .into())
        });

        let mut copier = MockCopier::new();
        copier.expect_materialize().times(0);

        let result = service(store, copier, MockManifests::new(), MockInst::new()).add(
            "nope",
            None,
            Path::new("/proj"),
            false,
        );

        assert!(matches!(
            result,
            Err(CookbookError::Domain(DomainError::TemplateNotFound { .. }))
        ));
    }

    #[test]
    fn kind_hint_is_forwarded_to_the_store() {
        let mut store = MockStore::new();
        store
            .expect_locate()
            .withf(|_, kind| *kind == Some(TemplateKind::Module))
            .returning(|_, _| {
                Ok(TemplateDescriptor::new(
                    "hono",
                    TemplateKind::Module,
                    "/templates/modules/hono",
                ))
            });
        store.expect_dependencies().returning(|_| Ok(None));

        let mut copier = MockCopier::new();
        copier
            .expect_materialize()
            .withf(|_, dest, _| dest == Path::new("/proj/src/api"))
            .returning(|_, _, _| Ok(MaterializeStats::default()));

        let report = service(store, copier, MockManifests::new(), MockInst::new())
            .add("hono", Some(TemplateKind::Module), Path::new("/proj"), false)
            .unwrap();

        assert_eq!(report.destination, PathBuf::from("/proj/src/api"));
    }

    #[test]
    fn merge_failure_is_reported_and_install_not_attempted() {
        let mut store = MockStore::new();
        store.expect_locate().returning(|_, _| Ok(pipe_descriptor()));
        store
            .expect_dependencies()
            .returning(|_| Ok(Some(some_deps())));

        let mut copier = MockCopier::new();
        copier
            .expect_materialize()
            .returning(|_, _, _| Ok(MaterializeStats::default()));

        let mut manifests = MockManifests::new();
        manifests.expect_load().returning(|p| {
            Err(ApplicationError::ManifestMerge {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        manifests.expect_save().times(0);

        let mut installer = MockInst::new();
        installer.expect_install().times(0);

        let report = service(store, copier, manifests, installer)
            .add("pumpfun-tokens", None, Path::new("/proj"), false)
            .unwrap();

        assert!(matches!(report.merge, MergeOutcome::Failed(_)));
        assert!(matches!(report.install, InstallOutcome::NotAttempted));
    }

    #[test]
    fn install_failure_is_advisory() {
        let mut store = MockStore::new();
        store.expect_locate().returning(|_, _| Ok(pipe_descriptor()));
        store
            .expect_dependencies()
            .returning(|_| Ok(Some(some_deps())));

        let mut copier = MockCopier::new();
        copier
            .expect_materialize()
            .returning(|_, _, _| Ok(MaterializeStats::default()));

        let mut manifests = MockManifests::new();
        manifests
            .expect_load()
            .returning(|_| Ok(ProjectManifest::parse("{}").unwrap()));
        manifests.expect_save().returning(|_, _| Ok(()));

        let mut installer = MockInst::new();
        installer.expect_install().returning(|dir| {
            Err(InstallError {
                command: "npm install".into(),
                dir: dir.to_path_buf(),
                reason: "exit status 1".into(),
            })
        });

        let report = service(store, copier, manifests, installer)
            .add("pumpfun-tokens", None, Path::new("/proj"), false)
            .unwrap();

        // The add itself succeeded; only the trigger is marked failed.
        assert!(matches!(report.merge, MergeOutcome::Merged));
        assert!(matches!(report.install, InstallOutcome::Failed(_)));
    }

    #[test]
    fn skip_install_suppresses_the_trigger() {
        let mut store = MockStore::new();
        store.expect_locate().returning(|_, _| Ok(pipe_descriptor()));
        store
            .expect_dependencies()
            .returning(|_| Ok(Some(some_deps())));

        let mut copier = MockCopier::new();
        copier
            .expect_materialize()
            .returning(|_, _, _| Ok(MaterializeStats::default()));

        let mut manifests = MockManifests::new();
        manifests
            .expect_load()
            .returning(|_| Ok(ProjectManifest::parse("{}").unwrap()));
        manifests.expect_save().returning(|_, _| Ok(()));

        let mut installer = MockInst::new();
        installer.expect_install().times(0);

        let report = service(store, copier, manifests, installer)
            .add("pumpfun-tokens", None, Path::new("/proj"), true)
            .unwrap();

        assert!(matches!(report.install, InstallOutcome::Skipped));
    }
}
