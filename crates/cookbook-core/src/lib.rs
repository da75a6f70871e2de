//! Core of the Cookbook scaffolding tool.
//!
//! Hexagonal layout: `domain` holds the pure template/manifest logic,
//! `application` holds the use-case services plus the port traits they call
//! through. Everything that actually touches a filesystem or spawns a
//! process lives in `cookbook-adapters`, behind those ports; the CLI wires
//! the two together.
//!
//! ```text
//! use cookbook_core::application::AddService;
//!
//! let service = AddService::new(store, materializer, manifests, installer);
//! let report = service.add("pumpfun-tokens", None, &cwd, false)?;
//! println!("installed into {}", report.destination.display());
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// One-stop imports for adapter and CLI crates.
pub mod prelude {
    pub use crate::application::{
        AddReport, AddService, InitReport, InitService, InstallOutcome, MergeOutcome,
        TemplateService,
        ports::{InstallError, Installer, ManifestStore, Materializer, TemplateStore},
    };
    pub use crate::domain::{
        ListedTemplate, PackageManager, PlaceholderContext, ProjectManifest, Registry,
        RegistryListing, TemplateDependencies, TemplateDescriptor, TemplateKind, TemplateMeta,
    };
    pub use crate::error::{CookbookError, CookbookResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
