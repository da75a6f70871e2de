//! The `cookbook` binary.
//!
//! Scaffolds Solana data pipes and project modules into a TypeScript indexer
//! project: copies template trees, keeps `package.json` in sync, and kicks
//! off the package-manager install.
//!
//! Exit codes: 0 success, 1 internal/system error, 2 user/input error,
//! 3 template not found, 4 configuration error. An install failure alone
//! never changes the exit code — the trigger is best-effort and only ever
//! produces a warning.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env first so RUST_LOG from a local .env reaches the filter below.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders --help/--version itself; anything reaching this
            // arm is a genuine argument error.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    debug!(command = ?command_name(&cli.command), "Parsed arguments");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    match dispatch(cli, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(err, verbose),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Add(_) => "add",
        Commands::List(_) => "list",
        Commands::Init(_) => "init",
        Commands::Completions(_) => "completions",
    }
}

fn dispatch(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Add(cmd) => commands::add::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, cli.global, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// The one place a [`CliError`] turns into stderr text and an exit code.
fn report_failure(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Straight to stderr so the message survives stdout redirection; colour
    // only when stderr is an actual terminal.
    let color = std::io::stderr().is_terminal();
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
