//! Concrete condiment decorators and the condiment registry.
//!
//! # Adding a New Condiment
//!
//! 1. Add a decorator type next to [`Milk`] and [`WhippedCream`]
//! 2. Add a variant to [`Condiment`] with its `as_str`, `label`, `price`,
//!    `FromStr` and `wrap` arms
//! 3. Add one [`CondimentDef`] entry to [`MENU`]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::beverage::BoxedBeverage;
use crate::domain::error::DomainError;

mod milk;
mod whipped_cream;

pub use milk::Milk;
pub use whipped_cream::WhippedCream;

// ── Condiment ────────────────────────────────────────────────────────────────

/// Names one of the available decorators, so orders can be described as data
/// (CLI flags, config files) and turned into a beverage chain later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condiment {
    Milk,
    WhippedCream,
}

impl Condiment {
    pub const ALL: [Condiment; 2] = [Condiment::Milk, Condiment::WhippedCream];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Milk => "milk",
            Self::WhippedCream => "whipped-cream",
        }
    }

    /// Text the decorator appends to the description, without the leading
    /// separator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::WhippedCream => "Whipped Cream",
        }
    }

    pub const fn price(self) -> f64 {
        match self {
            Self::Milk => Milk::PRICE,
            Self::WhippedCream => WhippedCream::PRICE,
        }
    }

    /// Wrap `inner` in this condiment's decorator.
    pub fn wrap(self, inner: BoxedBeverage) -> BoxedBeverage {
        match self {
            Self::Milk => Box::new(Milk::from_boxed(inner)),
            Self::WhippedCream => Box::new(WhippedCream::from_boxed(inner)),
        }
    }
}

impl fmt::Display for Condiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condiment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "" => Err(DomainError::EmptyCondimentName),
            "milk" => Ok(Self::Milk),
            "whipped-cream" | "cream" | "whip" => Ok(Self::WhippedCream),
            _ => Err(DomainError::UnknownCondiment {
                name: s.trim().to_owned(),
            }),
        }
    }
}

// ── Menu ─────────────────────────────────────────────────────────────────────

/// What the menu says about one condiment.
#[derive(Debug, Clone, Copy)]
pub struct CondimentDef {
    pub condiment: Condiment,
    pub label: &'static str,
    pub price: f64,
}

impl CondimentDef {
    pub const fn of(condiment: Condiment) -> Self {
        Self {
            condiment,
            label: condiment.label(),
            price: condiment.price(),
        }
    }
}

/// Every condiment on offer, in the order the menu lists them.
pub static MENU: &[CondimentDef] = &[
    CondimentDef::of(Condiment::Milk),
    CondimentDef::of(Condiment::WhippedCream),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Beverage, BlackCoffee};

    #[test]
    fn condiment_parses_names_and_aliases() {
        assert_eq!(Condiment::from_str("milk").unwrap(), Condiment::Milk);
        assert_eq!(Condiment::from_str("MILK").unwrap(), Condiment::Milk);
        assert_eq!(
            Condiment::from_str("whipped-cream").unwrap(),
            Condiment::WhippedCream
        );
        assert_eq!(
            Condiment::from_str("Whipped Cream").unwrap(),
            Condiment::WhippedCream
        );
        assert_eq!(
            Condiment::from_str("whipped_cream").unwrap(),
            Condiment::WhippedCream
        );
        assert_eq!(Condiment::from_str("whip").unwrap(), Condiment::WhippedCream);
    }

    #[test]
    fn unknown_condiment_is_rejected() {
        assert_eq!(
            Condiment::from_str("sugar"),
            Err(DomainError::UnknownCondiment {
                name: "sugar".into()
            })
        );
        assert_eq!(
            Condiment::from_str("  "),
            Err(DomainError::EmptyCondimentName)
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for condiment in Condiment::ALL {
            assert_eq!(
                Condiment::from_str(&condiment.to_string()).unwrap(),
                condiment
            );
        }
    }

    #[test]
    fn menu_has_an_entry_per_condiment() {
        assert_eq!(MENU.len(), Condiment::ALL.len());
        for condiment in Condiment::ALL {
            assert_eq!(
                MENU.iter().filter(|d| d.condiment == condiment).count(),
                1,
                "{condiment} must appear exactly once"
            );
        }
    }

    #[test]
    fn menu_entries_agree_with_condiment() {
        for def in MENU {
            assert_eq!(def.label, def.condiment.label());
            assert_eq!(def.price.to_bits(), def.condiment.price().to_bits());
        }
    }

    #[test]
    fn menu_labels_match_decorator_suffixes() {
        assert_eq!(Milk::SUFFIX, format!(", {}", Condiment::Milk.label()));
        assert_eq!(
            WhippedCream::SUFFIX,
            format!(", {}", Condiment::WhippedCream.label())
        );
    }

    #[test]
    fn wrap_applies_the_matching_decorator() {
        let coffee = Condiment::WhippedCream.wrap(Box::new(BlackCoffee));
        assert_eq!(coffee.description(), "Black Coffee, Whipped Cream");
        assert!((coffee.cost() - (2.0 + Condiment::WhippedCream.price())).abs() < 1e-9);
    }

    #[test]
    fn every_decorator_appends_its_label() {
        for condiment in Condiment::ALL {
            let coffee = condiment.wrap(Box::new(BlackCoffee));
            assert_eq!(
                coffee.description(),
                format!("Black Coffee, {}", condiment.label())
            );
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Condiment::WhippedCream).unwrap();
        assert_eq!(json, "\"whipped-cream\"");
    }
}
