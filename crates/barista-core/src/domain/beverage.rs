//! The beverage capability.

/// Anything that can be served: it has a human-readable description and a
/// price.
///
/// Both operations are total and side-effect free. Calling them repeatedly
/// on the same object returns the same values.
#[cfg_attr(test, mockall::automock)]
pub trait Beverage {
    /// Non-empty, human-readable description, e.g. `"Black Coffee, Milk"`.
    fn description(&self) -> String;

    /// Non-negative price of the beverage including every layer.
    fn cost(&self) -> f64;
}

/// A beverage chain assembled at runtime.
pub type BoxedBeverage = Box<dyn Beverage + Send + Sync>;

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

impl<B: Beverage + ?Sized> Beverage for &B {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }
}
