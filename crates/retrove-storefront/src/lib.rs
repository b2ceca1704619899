//! Application state for the Retrove storefront and admin console.
//!
//! [`Storefront`] owns the catalog, order history, cart, checkout and
//! navigation. It changes only through [`Command`]s, each of which either
//! yields an [`Event`] or fails with a [`retrove_commerce::CommerceError`]
//! and changes nothing. Views in [`views`] are pure reads of that state.
//!
//! # Example
//!
//! ```rust
//! use retrove_storefront::prelude::*;
//!
//! let mut store = Storefront::new(StorefrontConfig::default());
//! store.apply(Command::AddToCart(ProductId::new(1))).unwrap();
//! store.apply(Command::CheckoutCart).unwrap();
//!
//! let event = store
//!     .apply(Command::PlaceOrder(CustomerDetails::new(
//!         "Dewi",
//!         "dewi@example.com",
//!         "Jl. Merdeka No. 17",
//!     )))
//!     .unwrap();
//! assert!(matches!(event, Event::OrderPlaced { .. }));
//! assert!(store.cart().is_empty());
//! ```

pub mod command;
pub mod config;
pub mod navigation;
pub mod persist;
pub mod seed;
pub mod state;
pub mod views;

pub use command::{Command, Event};
pub use config::{ConfigError, StorefrontConfig};
pub use navigation::{AdminPage, Navigation, Page, StaticPage};
pub use persist::CartPersistence;
pub use state::Storefront;
pub use views::View;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::command::{Command, Event};
    pub use crate::config::StorefrontConfig;
    pub use crate::navigation::{AdminPage, Page, StaticPage};
    pub use crate::persist::CartPersistence;
    pub use crate::state::Storefront;
    pub use crate::views::{AdminView, View};

    pub use retrove_commerce::prelude::*;
}
