//! Application services — use case orchestration.

pub mod add_service;
pub mod init_service;
pub mod template_service;

pub use add_service::{AddReport, AddService, InstallOutcome, MergeOutcome};
pub use init_service::{InitReport, InitService};
pub use template_service::TemplateService;
