//! External package-manager invocation.
//!
//! Spawns `<pm> install` with stdout/stderr inherited so the user watches the
//! installer's own output. Blocks until the process exits; no internal
//! timeout — if the installer hangs, the tool hangs with it. Callers treat
//! any [`InstallError`] as advisory.

use std::path::Path;
use std::process::Command;

use tracing::{info, instrument};

use cookbook_core::{
    application::ports::{InstallError, Installer},
    domain::PackageManager,
};

/// Production installer spawning the real package manager.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInstaller;

impl ProcessInstaller {
    pub fn new() -> Self {
        Self
    }

    /// Pick the package manager from lockfiles in `project_dir`.
    pub fn detect(project_dir: &Path) -> PackageManager {
        PackageManager::from_markers(
            project_dir.join("pnpm-lock.yaml").is_file(),
            project_dir.join("yarn.lock").is_file(),
        )
    }
}

impl Installer for ProcessInstaller {
    #[instrument(skip_all, fields(dir = %project_dir.display()))]
    fn install(&self, project_dir: &Path) -> Result<(), InstallError> {
        let pm = Self::detect(project_dir);
        let command_line = format!("{} install", pm.command());
        info!(installer = %pm, "Running installer");

        let status = Command::new(pm.command())
            .args(pm.install_args())
            .current_dir(project_dir)
            .status()
            .map_err(|e| InstallError {
                command: command_line.clone(),
                dir: project_dir.to_path_buf(),
                reason: format!("failed to spawn: {e}"),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError {
                command: command_line,
                dir: project_dir.to_path_buf(),
                reason: format!("exited with {status}"),
            })
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
