//! Composing a beverage from an ordered list of condiments.
//!
//! An [`Order`] is the data form of a decorator chain: the first condiment
//! sits directly on the coffee, the last one is outermost. Nesting order
//! decides the description; the cost is the same in any order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::domain::beverage::{Beverage, BoxedBeverage};
use crate::domain::black_coffee::BlackCoffee;
use crate::domain::condiments::Condiment;
use crate::domain::error::DomainError;

/// Condiments to apply to a black coffee, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    condiments: Vec<Condiment>,
}

impl Order {
    pub fn new(condiments: Vec<Condiment>) -> Self {
        Self { condiments }
    }

    /// Milk first, then whipped cream.
    pub fn house() -> Self {
        Self::new(vec![Condiment::Milk, Condiment::WhippedCream])
    }

    /// Parse condiment names in the order given.
    ///
    /// Stops at the first name that is not on the menu.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        names
            .iter()
            .map(|name| Condiment::from_str(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Add one more layer on the outside.
    pub fn with(mut self, condiment: Condiment) -> Self {
        self.condiments.push(condiment);
        self
    }

    pub fn condiments(&self) -> &[Condiment] {
        &self.condiments
    }

    pub fn is_empty(&self) -> bool {
        self.condiments.is_empty()
    }

    /// Build the decorator chain for this order.
    #[instrument(skip_all, fields(layers = self.condiments.len()))]
    pub fn brew(&self) -> BoxedBeverage {
        let base: BoxedBeverage = Box::new(BlackCoffee);
        trace!(base = BlackCoffee::NAME, "starting from base");

        self.condiments.iter().fold(base, |inner, &condiment| {
            debug!(%condiment, "wrapping beverage");
            condiment.wrap(inner)
        })
    }

    /// Brew the order and report on it.
    pub fn receipt(&self) -> Receipt {
        Receipt::of(&self.brew())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.condiments.is_empty() {
            return f.write_str("(plain)");
        }
        let names: Vec<&str> = self.condiments.iter().map(Condiment::as_str).collect();
        f.write_str(&names.join(" -> "))
    }
}

impl From<Vec<Condiment>> for Order {
    fn from(condiments: Vec<Condiment>) -> Self {
        Self::new(condiments)
    }
}

// ── Receipt ──────────────────────────────────────────────────────────────────

/// Final description and cost of a beverage, captured once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub description: String,
    pub cost: f64,
}

impl Receipt {
    pub fn of(beverage: &impl Beverage) -> Self {
        Self {
            description: beverage.description(),
            cost: beverage.cost(),
        }
    }
}

/// Two lines: the description, then the cost in default float formatting.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        write!(f, "{}", self.cost)
    }
}
