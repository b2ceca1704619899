//! Checkout module.
//!
//! Contains the checkout items, customer details and orders.

mod customer;
mod flow;
mod order;

pub use customer::CustomerDetails;
pub use flow::{Checkout, CheckoutSource};
pub use order::{Order, OrderBook, OrderStatus, StatusPolicy, TimelineStep};
