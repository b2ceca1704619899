//! Domain types and rules for the Retrove vintage storefront.
//!
//! - **Catalog**: one-of-a-kind products, categories, reviews
//! - **Cart**: unique pieces with a flat shipping surcharge
//! - **Checkout**: customer details, orders and the status lifecycle
//! - **Search**: listings, sorting, pagination
//! - **Admin**: dashboard figures
//!
//! Everything here is pure data manipulation; state ownership and
//! persistence live in `retrove-storefront`.
//!
//! # Example
//!
//! ```rust
//! use retrove_commerce::prelude::*;
//!
//! let mut catalog = Catalog::default();
//! let jacket = catalog
//!     .add_product(
//!         ProductDraft {
//!             name: Some("Jaket Denim Levi's".to_string()),
//!             price: Some(Money::idr(450_000)),
//!             ..Default::default()
//!         },
//!         Currency::IDR,
//!     )
//!     .unwrap()
//!     .clone();
//!
//! let mut cart = Cart::new();
//! cart.add(&jacket).unwrap();
//! assert!(cart.add(&jacket).is_err());
//!
//! let pricing = cart.pricing(Money::idr(25_000)).unwrap();
//! assert_eq!(pricing.total.display(), "Rp475.000");
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::admin::DashboardStats;
    pub use crate::cart::{Cart, PriceSummary};
    pub use crate::catalog::{Catalog, Category, CategoryDraft, Product, ProductDraft, Review};
    pub use crate::checkout::{
        Checkout, CheckoutSource, CustomerDetails, Order, OrderBook, OrderStatus, StatusPolicy,
        TimelineStep,
    };
    pub use crate::search::{Listing, Pagination, ProductQuery, SearchResults, SortOption};
}
