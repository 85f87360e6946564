//! Core domain layer for Barista.
//!
//! Pure, synchronous logic with no I/O:
//!
//! - **[`Beverage`]**: the capability every layer satisfies
//! - **[`BlackCoffee`]**: the base component
//! - **[`Decorator`]**: owns the one beverage a condiment wraps
//! - **[`Milk`], [`WhippedCream`]**: concrete condiment decorators
//! - **[`Order`], [`Receipt`]**: orders as data, and what they cost

pub mod beverage;
pub mod black_coffee;
pub mod condiments;
pub mod decorator;
pub mod error;
pub mod order;

// Re-exports for convenience
pub use beverage::{Beverage, BoxedBeverage};
pub use black_coffee::BlackCoffee;
pub use condiments::{Condiment, CondimentDef, MENU, Milk, WhippedCream};
pub use decorator::Decorator;
pub use error::{DomainError, ErrorCategory};
pub use order::{Order, Receipt};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Composition properties
    // ========================================================================

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn samples() -> Vec<BoxedBeverage> {
        vec![
            Box::new(BlackCoffee),
            Box::new(Milk::new(BlackCoffee)),
            Box::new(WhippedCream::new(BlackCoffee)),
            Box::new(WhippedCream::new(Milk::new(BlackCoffee))),
            Order::new(vec![Condiment::Milk; 3]).brew(),
        ]
    }

    #[test]
    fn milk_extends_any_beverage() {
        for inner in samples() {
            let before = (inner.description(), inner.cost());
            let wrapped = Milk::from_boxed(inner);
            assert_eq!(wrapped.description(), format!("{}, Milk", before.0));
            assert!(approx_eq(wrapped.cost(), before.1 + 0.5));
        }
    }

    #[test]
    fn whipped_cream_extends_any_beverage() {
        for inner in samples() {
            let before = (inner.description(), inner.cost());
            let wrapped = WhippedCream::from_boxed(inner);
            assert_eq!(
                wrapped.description(),
                format!("{}, Whipped Cream", before.0)
            );
            assert!(approx_eq(wrapped.cost(), before.1 + 0.7));
        }
    }

    #[test]
    fn every_beverage_is_described_and_priced() {
        for beverage in samples() {
            assert!(!beverage.description().is_empty());
            assert!(beverage.cost() >= 0.0);
        }
    }

    #[test]
    fn decorators_are_substitutable_for_beverages() {
        fn describe(beverage: &dyn Beverage) -> String {
            beverage.description()
        }

        let milk = Milk::new(BlackCoffee);
        assert_eq!(describe(&milk), describe(&Order::new(vec![Condiment::Milk]).brew()));
    }

    #[test]
    fn chains_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoxedBeverage>();
        assert_send_sync::<Milk>();
        assert_send_sync::<WhippedCream>();
    }
}
