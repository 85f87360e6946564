//! `barista brew`: compose an order and print its description and cost.

use barista_core::domain::{Order, Receipt};
use tracing::{info, instrument};

use crate::{
    cli::BrewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Brew the requested order and report on it.
#[instrument(skip_all)]
pub fn execute(args: BrewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let order = resolve_order(&args, config)?;
    info!(%order, "brewing");

    let beverage = order.brew();
    output.receipt(&Receipt::of(&beverage))
}

/// Flags win over config: `--plain` means no condiments, `--add` replaces
/// the configured list, otherwise the configured (or house) order is used.
fn resolve_order(args: &BrewArgs, config: &AppConfig) -> CliResult<Order> {
    if args.plain {
        return Ok(Order::default());
    }
    if !args.add.is_empty() {
        return Order::parse(args.add.as_slice()).map_err(|e| CliError::Core(e.into()));
    }
    config.order()
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_core::domain::Condiment;

    fn args(add: &[&str], plain: bool) -> BrewArgs {
        BrewArgs {
            add: add.iter().map(|s| s.to_string()).collect(),
            plain,
        }
    }

    #[test]
    fn defaults_to_configured_house_order() {
        let order = resolve_order(&BrewArgs::default(), &AppConfig::default()).unwrap();
        assert_eq!(order, Order::house());
    }

    #[test]
    fn add_flags_replace_config() {
        let order = resolve_order(&args(&["whipped-cream", "milk"], false), &AppConfig::default())
            .unwrap();
        assert_eq!(
            order.condiments(),
            &[Condiment::WhippedCream, Condiment::Milk]
        );
    }

    #[test]
    fn plain_ignores_config() {
        let order = resolve_order(&args(&[], true), &AppConfig::default()).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn unknown_flag_condiment_is_not_found() {
        let err = resolve_order(&args(&["syrup"], false), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn bad_configured_condiment_is_a_config_error() {
        let mut config = AppConfig::default();
        config.order.condiments = vec!["milk".into(), "foam".into()];
        let err = resolve_order(&BrewArgs::default(), &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert!(!err.to_string().contains("Order failed"));
        assert_eq!(err.exit_code(), 4);
    }
}
