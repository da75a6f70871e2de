//! Core domain layer for Cookbook.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (template discovery, copying, manifest persistence, the package
//! manager process) is handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable entities**: Descriptors are Clone + PartialEq

pub mod context;
pub mod error;
pub mod manifest;
pub mod package_manager;
pub mod registry;
pub mod template;

// Re-exports for convenience
pub use context::PlaceholderContext;
pub use error::{DomainError, ErrorCategory};
pub use manifest::{DependencyMap, ProjectManifest, TemplateDependencies};
pub use package_manager::PackageManager;
pub use registry::{ListedTemplate, ListingSource, Registry, RegistryListing, TemplateMeta};
pub use template::{TemplateDescriptor, TemplateKind};
