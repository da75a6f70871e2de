//! The clap derive surface: every argument name, alias, and help string
//! lives in this module and nowhere else.

use clap::{Args, Parser, Subcommand, ValueEnum};

use cookbook_core::domain::TemplateKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cookbook",
    bin_name = "cookbook",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Add Solana data pipes to your indexer project",
    long_about = "Cookbook scaffolds data-ingestion pipes and project modules \
                  into an existing indexer project, keeping package.json in sync.",
    after_help = "EXAMPLES:\n\
        \x20 cookbook init my-indexer\n\
        \x20 cookbook add pumpfun-tokens\n\
        \x20 cookbook add hono --type module\n\
        \x20 cookbook list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a pipe or module to the current project.
    #[command(
        visible_alias = "a",
        about = "Add a pipe or module to your project",
        after_help = "EXAMPLES:\n\
            \x20 cookbook add pumpfun-tokens\n\
            \x20 cookbook add solana-swaps --type pipe\n\
            \x20 cookbook add hono --type module --no-install"
    )]
    Add(AddArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates (pipes and modules)",
        after_help = "EXAMPLES:\n\
            \x20 cookbook list\n\
            \x20 cookbook list --format json"
    )]
    List(ListArgs),

    /// Initialize a new indexer project.
    #[command(
        about = "Initialize a new indexer project",
        after_help = "EXAMPLES:\n\
            \x20 cookbook init              # prompts for a name\n\
            \x20 cookbook init my-indexer\n\
            \x20 cookbook init my-indexer --no-install"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cookbook completions bash > ~/.local/share/bash-completion/completions/cookbook\n\
            \x20 cookbook completions zsh  > ~/.zfunc/_cookbook\n\
            \x20 cookbook completions fish > ~/.config/fish/completions/cookbook.fish"
    )]
    Completions(CompletionsArgs),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `cookbook add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Template to add (e.g. pumpfun-tokens, hono).
    #[arg(value_name = "TEMPLATE", help = "Template to add (e.g. pumpfun-tokens, hono)")]
    pub template: String,

    /// Template category.  Without it, pipes are searched before modules.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Template type (pipe or module)"
    )]
    pub kind: Option<KindArg>,

    /// Skip the automatic dependency install.
    #[arg(long = "no-install", help = "Skip the package-manager install step")]
    pub no_install: bool,
}

/// Template category as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    Pipe,
    Module,
}

impl From<KindArg> for TemplateKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Pipe => TemplateKind::Pipe,
            KindArg::Module => TemplateKind::Module,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `cookbook list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable, grouped by category.
    Table,
    /// One name per line.
    List,
    /// JSON document.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cookbook init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name.  Prompted for interactively when omitted.
    #[arg(value_name = "NAME", help = "Project name (prompted when omitted)")]
    pub name: Option<String>,

    /// Skip the automatic dependency install.
    #[arg(long = "no-install", help = "Skip the package-manager install step")]
    pub no_install: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cookbook completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from(["cookbook", "add", "pumpfun-tokens"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.template, "pumpfun-tokens");
                assert!(args.kind.is_none());
                assert!(!args.no_install);
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn parse_add_with_type_hint() {
        let cli = Cli::parse_from(["cookbook", "add", "hono", "--type", "module"]);
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.kind, Some(KindArg::Module));
        } else {
            panic!("expected Add command");
        }
    }

    #[test]
    fn kind_arg_converts_to_domain_kind() {
        assert_eq!(TemplateKind::from(KindArg::Pipe), TemplateKind::Pipe);
        assert_eq!(TemplateKind::from(KindArg::Module), TemplateKind::Module);
    }

    #[test]
    fn parse_init_without_name() {
        let cli = Cli::parse_from(["cookbook", "init"]);
        if let Commands::Init(args) = cli.command {
            assert!(args.name.is_none());
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn parse_list_alias() {
        let cli = Cli::parse_from(["cookbook", "ls"]);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["cookbook", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn templates_dir_flag_is_global() {
        let cli = Cli::parse_from(["cookbook", "list", "--templates-dir", "/tmp/t"]);
        assert_eq!(
            cli.global.templates_dir.as_deref(),
            Some(std::path::Path::new("/tmp/t"))
        );
    }
}
