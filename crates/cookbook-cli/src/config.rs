//! TOML configuration, loaded once at startup and owned by the CLI layer.
//!
//! The main job here is resolving the templates root, which is then handed
//! to the store as an explicit constructor argument — nothing downstream
//! guesses it from ambient process state. Priority: the `--templates-dir`
//! flag (clap folds in `COOKBOOK_TEMPLATES_DIR`), then `templates.local_path`
//! from the config file, then `templates/` next to the executable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Templates root directory, overriding the exe-adjacent default.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from `config_file` (the `--config` value) or the
    /// default location.  A missing file yields the built-in defaults; a
    /// present-but-invalid file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
    }

    /// Default config location: the platform config directory via
    /// `directories`, or `.cookbook.toml` in the cwd when that fails.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cookbook", "cookbook")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cookbook.toml"))
    }

    /// Resolve the templates root from the flag, the config file, or the
    /// exe-adjacent default, in that order.
    pub fn templates_root(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(dir) = flag {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.templates.local_path {
            return dir.clone();
        }
        default_templates_root()
    }
}

/// `templates/` next to the installed binary; bare `templates/` when the
/// executable location cannot be determined.
fn default_templates_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .unwrap_or_else(|| PathBuf::from("templates"))
}
