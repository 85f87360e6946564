//! Output management and formatting.
//!
//! The brew report always goes to stdout exactly as the core renders it;
//! everything else (menu and config listings) follows the quiet and colour
//! settings.

use std::io::{self, IsTerminal};

use barista_core::domain::Receipt;
use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => configured_format(&config.output.format),
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// The brew report.  Never suppressed: it is the program's output.
    pub fn receipt(&self, receipt: &Receipt) -> CliResult<()> {
        let rendered = render_receipt(receipt, self.resolved_format)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Parse the `output.format` config value; unknown values fall back to auto.
fn configured_format(value: &str) -> OutputFormat {
    OutputFormat::from_str(value, true).unwrap_or_else(|_| {
        warn!(format = value, "unknown output.format in config, using auto");
        OutputFormat::Auto
    })
}

/// Render a receipt for the given (resolved) format.
///
/// Text formats produce two lines: description, then cost.
pub fn render_receipt(receipt: &Receipt, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(receipt).map_err(|e| CliError::Serialization {
                message: "Failed to serialise receipt".into(),
                source: e,
            })
        }
        OutputFormat::Auto | OutputFormat::Human | OutputFormat::Plain => Ok(receipt.to_string()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
