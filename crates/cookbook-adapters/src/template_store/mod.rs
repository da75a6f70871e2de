//! Template store adapters.

mod fs;

pub use fs::FsTemplateStore;
