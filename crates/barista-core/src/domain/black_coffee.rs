use serde::{Deserialize, Serialize};

use crate::domain::beverage::Beverage;

/// The base component every order starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackCoffee;

impl BlackCoffee {
    pub const NAME: &'static str = "Black Coffee";
    pub const PRICE: f64 = 2.0;
}

impl Beverage for BlackCoffee {
    fn description(&self) -> String {
        Self::NAME.to_owned()
    }

    fn cost(&self) -> f64 {
        Self::PRICE
    }
}
