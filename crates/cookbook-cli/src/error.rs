//! CLI-level error type: one enum covering everything a command handler can
//! fail with, each variant knowing its suggestions, its exit code, and how
//! to print itself.

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use cookbook_core::error::{CookbookError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// `add` was run outside an indexer project.
    #[error("not a valid project directory: no package.json in {dir}")]
    NotInProject { dir: PathBuf },

    /// `init` got a name that cannot become a directory.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// `init` target directory already exists.
    #[error("project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Config file unreadable, or the templates root could not be resolved.
    #[error("configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything bubbling up from `cookbook-core` (locate, materialize,
    /// merge). The core error carries its own suggestions and category.
    #[error("{0}")]
    Core(#[from] CookbookError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt dismissed.
    #[error("operation cancelled")]
    Cancelled,

    /// Build compiled without the needed feature (e.g. `interactive`).
    #[error("feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Coarse classification driving both styling and the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    /// What the user can do about it, one line per idea.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotInProject { dir } => vec![
                format!("{} has no package.json", dir.display()),
                "Create a project first: cookbook init".into(),
                "Or cd into an existing indexer project".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Names may use letters, digits, hyphens and underscores".into(),
                "Try something like: my-indexer".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("{} is already taken", path.display()),
                "Pick another name, or remove the directory first".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Point --templates-dir at a templates directory".into(),
                "COOKBOOK_TEMPLATES_DIR works too".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions and free disk space".into(),
            ],
            Self::Cancelled => vec!["No changes were made".into()],
            Self::FeatureNotAvailable { feature } => vec![
                format!("This build lacks the '{feature}' feature"),
                "Pass the value as an argument instead of being prompted".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotInProject { .. }
            | Self::InvalidProjectName { .. }
            | Self::ProjectExists { .. }
            | Self::Cancelled => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Category → OS exit code. Internal 1, user 2, not-found 3, config 4.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Render the error block: message, optional cause chain, suggestions.
    ///
    /// `color` switches ANSI styling; `verbose` swaps the "-v for details"
    /// footer for the actual source chain.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();

        if color {
            let _ = writeln!(out, "\n{} {}", "✗".red().bold(), "Error:".red().bold());
            let _ = writeln!(out, "\n  {}", self.to_string().red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                if color {
                    let _ = writeln!(out, "  {} {}", "→".dimmed(), err.to_string().dimmed());
                } else {
                    let _ = writeln!(out, "  Caused by: {err}");
                }
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            if color {
                let _ = writeln!(out, "\n{}", "Suggestions:".yellow().bold());
            } else {
                out.push_str("\nSuggestions:\n");
            }
            for s in suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            let footer = "Use -v / --verbose for more details.";
            if color {
                let _ = writeln!(out, "\n{} {}", "ℹ".blue(), footer.dimmed());
            } else {
                let _ = writeln!(out, "\n{footer}");
            }
        }

        out
    }

    /// Structured log event, severity matched to the category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(error = %self, "Command failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "Command failed");
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!(%cause, "Error source");
        }
    }
}
