//! Use-case orchestration: the services driving add/init/list, the port
//! traits they depend on, and the errors those ports can surface. Business
//! rules stay in [`crate::domain`]; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{
    InstallError, Installer, ManifestStore, MaterializeStats, Materializer, TemplateStore,
};
pub use services::{
    AddReport, AddService, InitReport, InitService, InstallOutcome, MergeOutcome, TemplateService,
};
