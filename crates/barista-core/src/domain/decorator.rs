//! Shared structure for condiment decorators.
//!
//! A [`Decorator`] owns exactly one inner beverage. It is set once at
//! construction and never reassigned; there is no way to build one without
//! a beverage to wrap. Concrete condiments embed a `Decorator` and implement
//! [`Beverage`] themselves, delegating to [`Decorator::wrapped`] before
//! applying their own delta.

use std::fmt;

use crate::domain::beverage::{Beverage, BoxedBeverage};

/// The wrap-one-beverage half of every condiment.
///
/// Intentionally does not implement [`Beverage`]: on its own it has nothing
/// to add.
pub struct Decorator {
    wrapped: BoxedBeverage,
}

impl Decorator {
    /// Wrap a concrete beverage.
    pub fn new(inner: impl Beverage + Send + Sync + 'static) -> Self {
        Self {
            wrapped: Box::new(inner),
        }
    }

    /// Wrap a beverage chain that is already boxed, without boxing it again.
    pub fn from_boxed(inner: BoxedBeverage) -> Self {
        Self { wrapped: inner }
    }

    /// The beverage one layer in.
    pub fn wrapped(&self) -> &dyn Beverage {
        self.wrapped.as_ref()
    }

    /// Peel this layer off and hand back the inner beverage.
    pub fn into_inner(self) -> BoxedBeverage {
        self.wrapped
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorator")
            .field("wrapped", &self.wrapped.description())
            .finish()
    }
}
