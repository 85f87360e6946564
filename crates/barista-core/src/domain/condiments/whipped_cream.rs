use crate::domain::beverage::{Beverage, BoxedBeverage};
use crate::domain::decorator::Decorator;

/// Tops whatever it wraps with whipped cream.
#[derive(Debug)]
pub struct WhippedCream {
    base: Decorator,
}

impl WhippedCream {
    pub const SUFFIX: &'static str = ", Whipped Cream";
    pub const PRICE: f64 = 0.7;

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

impl Beverage for WhippedCream {
    fn description(&self) -> String {
        let mut description = self.base.wrapped().description();
        description.push_str(Self::SUFFIX);
        description
    }

    fn cost(&self) -> f64 {
        self.base.wrapped().cost() + Self::PRICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::beverage::MockBeverage;
    use crate::domain::{BlackCoffee, Milk};

    #[test]
    fn whipped_cream_appends_suffix_and_price() {
        let coffee = WhippedCream::new(BlackCoffee);
        assert_eq!(coffee.description(), "Black Coffee, Whipped Cream");
        assert!((coffee.cost() - 2.7).abs() < 1e-9);
    }

    #[test]
    fn whipped_cream_over_any_beverage() {
        let mut inner = MockBeverage::new();
        inner
            .expect_description()
            .times(1)
            .returning(|| "Hot Chocolate".to_owned());
        inner.expect_cost().times(1).returning(|| 3.0);

        let cocoa = WhippedCream::new(inner);
        assert_eq!(cocoa.description(), "Hot Chocolate, Whipped Cream");
        assert!((cocoa.cost() - 3.7).abs() < 1e-9);
    }

    #[test]
    fn house_order_matches_example() {
        let coffee = WhippedCream::new(Milk::new(BlackCoffee));
        assert_eq!(coffee.description(), "Black Coffee, Milk, Whipped Cream");
        assert!((coffee.cost() - 3.2).abs() < 1e-9);
        assert_eq!(coffee.cost().to_string(), "3.2");
    }

    #[test]
    fn reversed_order_changes_description_not_cost() {
        let coffee = Milk::new(WhippedCream::new(BlackCoffee));
        assert_eq!(coffee.description(), "Black Coffee, Whipped Cream, Milk");
        assert!((coffee.cost() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let coffee = WhippedCream::new(Milk::new(BlackCoffee));
        assert_eq!(coffee.description(), coffee.description());
        assert_eq!(coffee.cost().to_bits(), coffee.cost().to_bits());
    }
}
