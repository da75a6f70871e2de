//! Package manager selection.
//!
//! The installer chooses its command from the lockfile present in the
//! project: `pnpm-lock.yaml` → pnpm, `yarn.lock` → yarn, neither → npm.
//! The choice itself is a pure function so it can be tested without touching
//! a filesystem; the adapter supplies the marker booleans.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Choose from lockfile markers. pnpm wins over yarn when both are
    /// present; npm is the default when neither is.
    pub fn from_markers(has_pnpm_lock: bool, has_yarn_lock: bool) -> Self {
        if has_pnpm_lock {
            Self::Pnpm
        } else if has_yarn_lock {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    /// Lockfile name announcing this manager, if it has one to detect.
    pub fn lockfile(self) -> Option<&'static str> {
        match self {
            Self::Npm => None,
            Self::Yarn => Some("yarn.lock"),
            Self::Pnpm => Some("pnpm-lock.yaml"),
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    pub fn install_args(self) -> &'static [&'static str] {
        &["install"]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}
