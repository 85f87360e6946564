use crate::domain::beverage::{Beverage, BoxedBeverage};
use crate::domain::decorator::Decorator;

/// Adds milk to whatever it wraps.
#[derive(Debug)]
pub struct Milk {
    base: Decorator,
}

impl Milk {
    pub const SUFFIX: &'static str = ", Milk";
    pub const PRICE: f64 = 0.5;

    pub fn new(inner: impl Beverage + Send + Sync + 'static) -> Self {
        Self {
            base: Decorator::new(inner),
        }
    }

    pub fn from_boxed(inner: BoxedBeverage) -> Self {
        Self {
            base: Decorator::from_boxed(inner),
        }
    }

    pub fn into_inner(self) -> BoxedBeverage {
        self.base.into_inner()
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        let mut description = self.base.wrapped().description();
        description.push_str(Self::SUFFIX);
        description
    }

    fn cost(&self) -> f64 {
        self.base.wrapped().cost() + Self::PRICE
    }
}
