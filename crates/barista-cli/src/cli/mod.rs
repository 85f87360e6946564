//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "barista",
    bin_name = "barista",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2615} Coffee built one condiment at a time",
    long_about = "Barista brews a black coffee, wraps it in condiment decorators \
                  in the order given, and prints the final description and cost.",
    after_help = "EXAMPLES:\n\
        \x20 barista                                  # house order: milk, then whipped cream\n\
        \x20 barista brew --add whipped-cream --add milk\n\
        \x20 barista brew --plain --output-format json\n\
        \x20 barista menu",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `brew` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Brew an order and print its description and cost.
    #[command(
        visible_alias = "b",
        about = "Brew an order (default command)",
        after_help = "EXAMPLES:\n\
            \x20 barista brew\n\
            \x20 barista brew --add milk --add milk\n\
            \x20 barista brew --plain"
    )]
    Brew(BrewArgs),

    /// Show the base coffee and every condiment with its price.
    #[command(visible_alias = "ls", about = "Show the menu")]
    Menu(MenuArgs),

    /// Inspect the Barista configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 barista --config barista.toml config get order.condiments\n\
            \x20 barista --config barista.toml config show"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 barista completions bash > ~/.local/share/bash-completion/completions/barista\n\
            \x20 barista completions zsh  > ~/.zfunc/_barista"
    )]
    Completions(CompletionsArgs),
}

// ── brew ──────────────────────────────────────────────────────────────────────

/// Arguments for `barista brew`.
#[derive(Debug, Clone, Default, Args)]
pub struct BrewArgs {
    /// Condiments to add, innermost first.  Replaces the configured order.
    #[arg(
        short = 'a',
        long = "add",
        value_name = "CONDIMENT",
        help = "Add a condiment (repeatable; order matters)"
    )]
    pub add: Vec<String>,

    /// Serve the black coffee with nothing on it.
    #[arg(
        long = "plain",
        conflicts_with = "add",
        help = "Brew black coffee without condiments"
    )]
    pub plain: bool,
}

// ── menu ──────────────────────────────────────────────────────────────────────

/// Arguments for `barista menu`.
#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Menu format"
    )]
    pub format: MenuFormat,
}

/// Output format for the `menu` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MenuFormat {
    /// Human-readable table.
    Table,
    /// One condiment name per line.
    List,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `barista completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `barista config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `order.condiments`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    Show,
}

// ── tests ─────────────────────────────────────────────────────────────────────
