//! `barista menu`: what can be ordered and what it costs.

use barista_core::domain::{BlackCoffee, MENU};

use crate::{
    cli::{MenuArgs, MenuFormat, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: MenuArgs, output: &OutputManager) -> CliResult<()> {
    // `--output-format json` wins over `--format`, as for `brew`.
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&menu_json()).map_err(|e| {
            CliError::Serialization {
                message: "Failed to serialise menu".into(),
                source: e,
            }
        })?;
        output.print(&json)?;
        return Ok(());
    }

    match args.format {
        MenuFormat::Table => {
            output.header("Base:")?;
            output.print(&format!(
                "  {:<16} {:>5.2}",
                BlackCoffee::NAME,
                BlackCoffee::PRICE
            ))?;
            output.header("Condiments:")?;
            for def in MENU {
                output.print(&format!(
                    "  {:<16} +{:.2}  ({})",
                    def.label,
                    def.price,
                    def.condiment.as_str()
                ))?;
            }
        }

        MenuFormat::List => {
            for def in MENU {
                output.print(def.condiment.as_str())?;
            }
        }

        MenuFormat::Csv => {
            for line in csv_rows() {
                output.print(&line)?;
            }
        }
    }

    Ok(())
}

fn menu_json() -> serde_json::Value {
    serde_json::json!({
        "base": { "name": BlackCoffee::NAME, "price": BlackCoffee::PRICE },
        "condiments": MENU
            .iter()
            .map(|def| serde_json::json!({
                "id": def.condiment.as_str(),
                "label": def.label,
                "price": def.price,
            }))
            .collect::<Vec<_>>(),
    })
}

fn csv_rows() -> Vec<String> {
    let mut rows = vec![
        "name,label,price".to_owned(),
        format!("base,{},{}", BlackCoffee::NAME, BlackCoffee::PRICE),
    ];
    rows.extend(
        MENU.iter()
            .map(|def| format!("{},{},{}", def.condiment, def.label, def.price)),
    );
    rows
}
