//! The items carried into checkout.

use crate::cart::{Cart, PriceSummary};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Where the checkout items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutSource {
    /// The whole cart.
    Cart,
    /// A single product bought directly ("buy now").
    BuyNow(ProductId),
}

/// Items waiting for the customer to submit the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checkout {
    items: Vec<Product>,
    source: CheckoutSource,
}

impl Checkout {
    /// Start a checkout for everything in the cart.
    pub fn from_cart(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCheckout);
        }
        Ok(Self {
            items: cart.items().to_vec(),
            source: CheckoutSource::Cart,
        })
    }

    /// Start a checkout for a single product.
    pub fn buy_now(product: &Product) -> Result<Self, CommerceError> {
        if !product.is_available() {
            return Err(CommerceError::SoldOut(product.name.clone()));
        }
        Ok(Self {
            items: vec![product.clone()],
            source: CheckoutSource::BuyNow(product.id),
        })
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn source(&self) -> CheckoutSource {
        self.source
    }

    /// IDs of the items being bought.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    /// Subtotal, shipping and total for the items.
    pub fn summary(&self, shipping: Money) -> Result<PriceSummary, CommerceError> {
        PriceSummary::for_items(&self.items, shipping)
    }

    /// Check that no item has been sold since checkout began.
    ///
    /// Items no longer in the catalog are checked against their snapshot.
    pub fn ensure_available(&self, catalog: &Catalog) -> Result<(), CommerceError> {
        for item in &self.items {
            let live = catalog.product(item.id).unwrap_or(item);
            if !live.is_available() {
                return Err(CommerceError::SoldOut(live.name.clone()));
            }
        }
        Ok(())
    }

    /// Consume the checkout, yielding the item snapshots.
    pub fn into_items(self) -> Vec<Product> {
        self.items
    }
}
