//! Implementation of the `cookbook list` command.
//!
//! Read-only: enumerates the registry (or the directory fallback) and
//! renders it.  Never mutates anything on disk.

use cookbook_adapters::FsTemplateStore;
use cookbook_core::{
    application::TemplateService,
    domain::{ListedTemplate, RegistryListing},
};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let templates_root = config.templates_root(global.templates_dir.as_deref());
    let service = TemplateService::new(Box::new(FsTemplateStore::new(&templates_root)));
    let listing = service.listing();

    match args.format {
        ListFormat::Table => render_table(&listing, &output)?,
        ListFormat::List => {
            // Bare names to stdout, parseable even in non-TTY pipes.
            for template in listing.pipes.iter().chain(listing.modules.iter()) {
                println!("{}", template.name);
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&listing).unwrap_or_else(|_| "{}".into());
            println!("{json}");
        }
    }

    Ok(())
}

fn render_table(listing: &RegistryListing, output: &OutputManager) -> CliResult<()> {
    if listing.is_empty() {
        output.warning("No templates found")?;
        output.dim("Point --templates-dir at a templates directory")?;
        return Ok(());
    }

    output.header("Available Templates:")?;
    output.print("")?;

    for (label, entries) in [("Pipes:", &listing.pipes), ("Modules:", &listing.modules)] {
        if entries.is_empty() {
            continue;
        }
        output.header(label)?;
        for template in entries {
            output.print(&format!("  {}", format_entry(template)))?;
        }
        output.print("")?;
    }

    output.dim("Usage:")?;
    output.dim("  cookbook add <template-name>")?;
    output.dim("  cookbook add <template-name> --type pipe")?;
    output.dim("  cookbook add <template-name> --type module")?;
    Ok(())
}

fn format_entry(template: &ListedTemplate) -> String {
    let mut line = template.name.clone();
    if let Some(description) = &template.description {
        line.push_str(&format!(" - {description}"));
    }
    if !template.tags.is_empty() {
        line.push_str(&format!(" [{}]", template.tags.join(", ")));
    }
    line
}

// ── tests ─────────────────────────────────────────────────────────────────────
