//! Flags shared by every subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity counter: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Errors only; everything else is suppressed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Strip ANSI styling. Also triggered by the `NO_COLOR` convention
    /// (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Alternative config file (default: the platform config directory).
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Root directory containing `registry.json`, `pipes/`, `modules/` and
    /// `base-project/`. Resolution order: this flag, then the env var, then
    /// the config file, then `templates/` beside the executable.
    #[arg(
        long = "templates-dir",
        global = true,
        value_name = "DIR",
        env = "COOKBOOK_TEMPLATES_DIR",
        help = "Templates root directory"
    )]
    pub templates_dir: Option<PathBuf>,
}
