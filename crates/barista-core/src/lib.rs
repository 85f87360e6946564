//! Barista Core - beverages composed from layered decorators.
//!
//! This crate holds the whole domain of the Barista tool: a base beverage
//! whose description and cost are extended by wrapping it in condiment
//! decorators, one layer at a time.
//!
//! ## Composition Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          WhippedCream (outermost)       │
//! │  ┌───────────────────────────────────┐  │
//! │  │               Milk                │  │
//! │  │  ┌─────────────────────────────┐  │  │
//! │  │  │   BlackCoffee ("Black       │  │  │
//! │  │  │   Coffee", 2.0)             │  │  │
//! │  │  └─────────────────────────────┘  │  │
//! │  │   + ", Milk"            + 0.5     │  │
//! │  └───────────────────────────────────┘  │
//! │   + ", Whipped Cream"        + 0.7      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every layer is itself a [`Beverage`](domain::Beverage), so decorators nest
//! to any depth. Queries delegate inwards first and apply the local delta on
//! the way out.
//!
//! ## Usage
//!
//! ```rust
//! use barista_core::prelude::*;
//!
//! let coffee = WhippedCream::new(Milk::new(BlackCoffee));
//! assert_eq!(coffee.description(), "Black Coffee, Milk, Whipped Cream");
//!
//! let receipt = Order::house().receipt();
//! assert_eq!(receipt.to_string(), "Black Coffee, Milk, Whipped Cream\n3.2");
//! ```

pub mod domain;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        Beverage, BlackCoffee, BoxedBeverage, Condiment, Decorator, Milk, Order, Receipt,
        WhippedCream,
    };
    pub use crate::error::{BaristaError, BaristaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
