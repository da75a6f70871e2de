//! Installer adapters.

mod process;

pub use process::ProcessInstaller;
