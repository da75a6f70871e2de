//! Implementation of the `cookbook init` command.
//!
//! Creates a fresh indexer project from the `base-project` template, then
//! runs the installer as a best-effort step.

use tracing::instrument;

use cookbook_adapters::{FsMaterializer, FsTemplateStore, ProcessInstaller};
use cookbook_core::application::{InitService, InstallOutcome};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cookbook init` command.
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Project name: positional argument or interactive prompt.
    let name = match args.name {
        Some(name) => name,
        None => prompt_project_name()?,
    };
    validate_project_name(&name)?;

    // 2. Refuse to clobber an existing directory.
    let cwd = std::env::current_dir()?;
    let project_dir = cwd.join(&name);
    if project_dir.exists() {
        return Err(CliError::ProjectExists { path: project_dir });
    }

    // 3. The base-project template must exist under the templates root.
    let templates_root = config.templates_root(global.templates_dir.as_deref());
    let store = FsTemplateStore::new(&templates_root);
    let base_template = store.base_project_dir();
    if !base_template.is_dir() {
        return Err(CliError::ConfigError {
            message: format!(
                "no base-project template under {}",
                templates_root.display()
            ),
            source: None,
        });
    }

    // 4. Materialize + install.
    let service = InitService::new(
        Box::new(FsMaterializer::new()),
        Box::new(ProcessInstaller::new()),
    );
    let report = service.init(&base_template, &name, &project_dir, args.no_install)?;

    output.success(&format!("Created project {name}"))?;
    output.print("")?;

    match &report.install {
        InstallOutcome::Completed => output.success("Dependencies installed successfully")?,
        InstallOutcome::Failed(_) => {
            output.warning("Auto-install failed. Please run manually:")?;
            output.dim(&format!("  cd {name}"))?;
            output.dim("  npm install")?;
        }
        InstallOutcome::Skipped => output.dim("Skipped dependency install (--no-install)")?,
        InstallOutcome::NotAttempted => {}
    }

    output.print("")?;
    output.header("Next steps:")?;
    output.dim(&format!("  cd {name}"))?;
    output.dim("  docker-compose up -d # Start ClickHouse")?;
    output.dim("  npm start")?;

    Ok(())
}

// ── Name handling ─────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_project_name() -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("Project name")
        .default("pipes-indexer".into())
        .interact_text()
        .map_err(|_| CliError::Cancelled)
}

#[cfg(not(feature = "interactive"))]
fn prompt_project_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// The name becomes a directory under the cwd, so it must be a single
/// non-hidden path component.
fn validate_project_name(name: &str) -> CliResult<()> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.starts_with('.') {
        "must not start with '.'"
    } else if name.contains('/') || name.contains('\\') {
        "must not contain path separators"
    } else {
        return Ok(());
    };

    Err(CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
