//! User-facing console output.
//!
//! Commands never call `println!` directly; they go through [`OutputManager`]
//! so quiet mode and colour stripping are applied in one place. The one
//! exception is error output, which always reaches the terminal.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// How a line should be presented.
enum Style {
    Plain,
    Dim,
    Header,
    Success,
    Warning,
    Error,
    Info,
}

impl Style {
    /// Status glyph, if this style carries one.
    fn glyph(&self) -> Option<&'static str> {
        match self {
            Style::Success => Some("\u{2713}"), // ✓
            Style::Error => Some("\u{2717}"),   // ✗
            Style::Warning => Some("\u{26a0}"), // ⚠
            Style::Info => Some("\u{2139}"),    // ℹ
            Style::Plain | Style::Dim | Style::Header => None,
        }
    }

    fn paint(&self, text: &str) -> String {
        match self {
            Style::Plain => text.to_owned(),
            Style::Dim => text.dimmed().to_string(),
            Style::Header => text.cyan().bold().to_string(),
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Error => text.red().to_string(),
            Style::Info => text.blue().to_string(),
        }
    }

    fn paint_glyph(&self, glyph: &str) -> String {
        match self {
            Style::Success => glyph.green().bold().to_string(),
            Style::Warning => glyph.yellow().bold().to_string(),
            Style::Error => glyph.red().bold().to_string(),
            Style::Info => glyph.blue().bold().to_string(),
            Style::Plain | Style::Dim | Style::Header => glyph.to_owned(),
        }
    }
}

/// Central writer for everything the user sees on stdout.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Combine CLI flags with the loaded config. Either source may disable
    /// colour; quiet only comes from the flag.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn emit(&self, style: Style, msg: &str) -> io::Result<()> {
        let line = match (style.glyph(), self.no_color) {
            (Some(glyph), true) => format!("{glyph} {msg}"),
            (Some(glyph), false) => format!("{} {}", style.paint_glyph(glyph), style.paint(msg)),
            (None, true) => msg.to_owned(),
            (None, false) => style.paint(msg),
        };
        self.term.write_line(&line)
    }

    fn emit_unless_quiet(&self, style: Style, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit(style, msg)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit_unless_quiet(Style::Plain, msg)
    }

    /// Detail line: paths, usage hints, follow-up commands.
    pub fn dim(&self, msg: &str) -> io::Result<()> {
        self.emit_unless_quiet(Style::Dim, msg)
    }

    pub fn header(&self, msg: &str) -> io::Result<()> {
        self.emit_unless_quiet(Style::Header, msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit_unless_quiet(Style::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit_unless_quiet(Style::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit_unless_quiet(Style::Info, msg)
    }

    /// Errors ignore quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.emit(Style::Error, msg)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
