//! Shopping cart module.
//!
//! Contains the cart and its pricing summary.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::Cart;
pub use pricing::PriceSummary;
