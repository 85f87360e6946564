//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! Configuration is opt-in.  Without `--config FILE` nothing is read (no
//! file, no environment) and the built-in defaults reproduce the house
//! order.  With it, sources stack lowest to highest:
//!
//! 1. Built-in defaults
//! 2. The given file
//! 3. `BARISTA_*` environment (`BARISTA_ORDER__CONDIMENTS=milk,milk`)
//! 4. CLI flags (handled at the call-site, not here)

use std::path::Path;

use barista_core::domain::{Condiment, Order};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "BARISTA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The order brewed when no condiments are given on the command line.
    pub order: OrderConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Condiment names, innermost first.
    pub condiments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            condiments: Order::house()
                .condiments()
                .iter()
                .map(|c| c.as_str().to_owned())
                .collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config_file`, or the defaults when none is given.
    ///
    /// Missing keys fall back to [`Default`] through `#[serde(default)]`, so a
    /// configured list always replaces the default list as a whole.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let Some(path) = config_file else {
            debug!("no config file given, using built-in defaults");
            return Ok(Self::default());
        };

        let loaded: Self = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("order.condiments")
                    .try_parsing(true),
            )
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| CliError::ConfigError {
                message: format!("cannot load {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })?;

        debug!(path = %path.display(), condiments = ?loaded.order.condiments, "configuration loaded");
        Ok(loaded)
    }

    /// The configured order, validated against the menu.
    pub fn order(&self) -> CliResult<Order> {
        self.order
            .condiments
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                name.parse::<Condiment>().map_err(|e| CliError::ConfigError {
                    message: format!("order.condiments[{idx}]: {e}"),
                    source: Some(Box::new(e)),
                })
            })
            .collect::<CliResult<Vec<_>>>()
            .map(Order::new)
    }
}
