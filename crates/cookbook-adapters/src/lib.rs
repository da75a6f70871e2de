//! Production implementations of the `cookbook-core` ports: the filesystem
//! template store and materializer, the JSON manifest store, and the
//! process-spawning installer. All I/O lives here.

pub mod installer;
pub mod manifest_store;
pub mod materializer;
pub mod template_store;

pub use installer::ProcessInstaller;
pub use manifest_store::JsonManifestStore;
pub use materializer::FsMaterializer;
pub use template_store::FsTemplateStore;
