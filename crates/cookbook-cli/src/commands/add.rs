//! Implementation of the `cookbook add` command.
//!
//! Responsibility: gate on being inside a project, wire the adapters into
//! the core `AddService`, and render the report.  The copy/merge/install
//! sequencing lives in the service, not here.

use tracing::instrument;

use cookbook_adapters::{FsMaterializer, FsTemplateStore, JsonManifestStore, ProcessInstaller};
use cookbook_core::{
    application::{AddService, InstallOutcome, MergeOutcome},
    domain::{DomainError, RegistryListing, TemplateDescriptor, TemplateKind},
    error::CookbookError,
};

use crate::{
    cli::{AddArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cookbook add` command.
#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Must be run inside an indexer project.
    let project_root = std::env::current_dir()?;
    if !project_root.join("package.json").is_file() {
        return Err(CliError::NotInProject { dir: project_root });
    }

    // 2. Wire adapters into the core service.
    let templates_root = config.templates_root(global.templates_dir.as_deref());
    let service = AddService::new(
        Box::new(FsTemplateStore::new(&templates_root)),
        Box::new(FsMaterializer::new()),
        Box::new(JsonManifestStore::new()),
        Box::new(ProcessInstaller::new()),
    );

    // 3. Run, special-casing not-found so the user sees what *is* available.
    let kind = args.kind.map(TemplateKind::from);
    let report = match service.add(&args.template, kind, &project_root, args.no_install) {
        Ok(report) => report,
        Err(err @ CookbookError::Domain(DomainError::TemplateNotFound { .. })) => {
            print_available(&service.available(), &output)?;
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    // 4. Render the report.
    output.success(&format!(
        "Added {} \"{}\"",
        report.descriptor.kind(),
        report.descriptor.name()
    ))?;
    output.dim(&format!("  {}", report.destination.display()))?;

    match &report.merge {
        MergeOutcome::NoDependencies => {}
        MergeOutcome::Merged => {
            output.info("Updated package.json with new dependencies")?;
        }
        MergeOutcome::Failed(err) => {
            // The copy stays in place; surface the merge failure as the
            // command's error after saying so.
            output.warning("Template files were added, but package.json could not be updated")?;
            return Err(err.clone().into());
        }
    }

    match &report.install {
        InstallOutcome::NotAttempted => {}
        InstallOutcome::Skipped => output.dim("Skipped dependency install (--no-install)")?,
        InstallOutcome::Completed => output.success("Dependencies installed successfully")?,
        InstallOutcome::Failed(_) => {
            output.warning("Auto-install failed. Please run manually:")?;
            output.dim("  npm install")?;
        }
    }

    show_usage_hints(&report.descriptor, &output)?;
    Ok(())
}

// ── Not-found candidates ──────────────────────────────────────────────────────

fn print_available(listing: &RegistryListing, output: &OutputManager) -> CliResult<()> {
    if listing.is_empty() {
        output.warning("No templates are available")?;
        return Ok(());
    }

    output.dim("Available templates:")?;
    output.print("")?;

    for (label, entries) in [("Pipes:", &listing.pipes), ("Modules:", &listing.modules)] {
        if entries.is_empty() {
            continue;
        }
        output.header(label)?;
        for template in entries {
            match &template.description {
                Some(description) => {
                    output.print(&format!("  {} - {}", template.name, description))?
                }
                None => output.print(&format!("  {}", template.name))?,
            }
        }
        output.print("")?;
    }

    output.dim("Usage: cookbook add <template-name>")?;
    output.dim("       cookbook list")?;
    Ok(())
}

// ── Usage hints ───────────────────────────────────────────────────────────────

/// Post-add guidance per template name.  Names without an entry get the
/// generic hint for their category.
const PIPE_HINTS: &[(&str, &[&str])] = &[
    (
        "solana-swaps",
        &[
            r#"import { SolanaSwapsPipe } from "./pipes/solana-swaps/index.js";"#,
            "const pipe = new SolanaSwapsPipe(clickhouse, config);",
            "await pipe.start();",
        ],
    ),
    (
        "pumpfun-tokens",
        &[
            r#"import { PumpfunTokensPipe } from "./pipes/pumpfun-tokens/index.js";"#,
            "const pipe = new PumpfunTokensPipe(clickhouse, config);",
            "await pipe.start();",
        ],
    ),
    (
        "pumpfun-swaps",
        &[
            r#"import { PumpfunSwapsPipe } from "./pipes/pumpfun-swaps/index.js";"#,
            "const pipe = new PumpfunSwapsPipe(clickhouse, config);",
            "await pipe.start();",
        ],
    ),
    (
        "metaplex-tokens",
        &[
            r#"import { MetaplexTokensPipe } from "./pipes/metaplex-tokens/index.js";"#,
            "const pipe = new MetaplexTokensPipe(clickhouse, config);",
            "await pipe.start();",
        ],
    ),
];

const MODULE_HINTS: &[(&str, &[&str])] = &[(
    "hono",
    &["// Start the API server:", "cd src/api", "npm start"],
)];

fn named_hints(
    table: &'static [(&'static str, &'static [&'static str])],
    name: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, lines)| *lines)
}

fn show_usage_hints(descriptor: &TemplateDescriptor, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("Usage:")?;

    let name = descriptor.name();
    match descriptor.kind() {
        TemplateKind::Pipe => match named_hints(PIPE_HINTS, name) {
            Some(lines) => {
                for line in lines {
                    output.dim(&format!("  {line}"))?;
                }
            }
            None => {
                output.dim(&format!(
                    "  import {{ {name} }} from \"./pipes/{name}/index.js\";"
                ))?;
                output.dim("  // Follow the pipe's documentation for usage")?;
            }
        },
        TemplateKind::Module => match named_hints(MODULE_HINTS, name) {
            Some(lines) => {
                for line in lines {
                    output.dim(&format!("  {line}"))?;
                }
            }
            None => {
                output.dim(&format!(
                    "  // Check src/modules/{name}/README.md for usage instructions"
                ))?;
            }
        },
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
