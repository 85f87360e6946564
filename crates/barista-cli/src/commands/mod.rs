//! One module per subcommand; each exposes an `execute` function.

pub mod brew;
pub mod completions;
pub mod config;
pub mod menu;
