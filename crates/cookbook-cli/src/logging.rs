//! Tracing subscriber setup.
//!
//! The core and adapter crates emit spans and events but never install a
//! subscriber; that happens exactly once here, before any command runs.
//!
//! Verbosity: silent default (WARN), `-v` INFO, `-vv` DEBUG, `-vvv` TRACE,
//! `--quiet` ERROR. A `RUST_LOG` value in the environment takes precedence
//! over all of the flags.

use std::io::IsTerminal as _;

use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events the default filter enables.
const CRATES: [&str; 3] = ["cookbook_cli", "cookbook_core", "cookbook_adapters"];

/// Install the global subscriber. Call once, before the first event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => {
            let level = level_for(args);
            let directives = CRATES
                .map(|krate| format!("{krate}={level}"))
                .join(",");
            EnvFilter::new(directives)
        }
    };

    let ansi = !args.no_color && std::io::stderr().is_terminal();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    // try_init: a second init in the same process (test binaries) is an
    // error result, not a panic.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
