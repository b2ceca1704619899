//! Shopping cart.

use crate::cart::PriceSummary;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart of product snapshots.
///
/// Items are unique by product ID; there is no quantity because every piece
/// is one of a kind. Serializes as a plain list of products.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from stored snapshots, dropping duplicate IDs.
    pub fn from_items(items: Vec<Product>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if !cart.contains(item.id) {
                cart.items.push(item);
            }
        }
        cart
    }

    /// Add a product snapshot.
    ///
    /// Returns an error if:
    /// - The product is already in the cart
    /// - The product is sold out
    pub fn add(&mut self, product: &Product) -> Result<(), CommerceError> {
        if self.contains(product.id) {
            return Err(CommerceError::AlreadyInCart(product.name.clone()));
        }
        if !product.is_available() {
            return Err(CommerceError::SoldOut(product.name.clone()));
        }
        self.items.push(product.clone());
        Ok(())
    }

    /// Remove a product. Removing an absent ID is a no-op.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() < len_before
    }

    /// Remove every listed product. Returns how many were removed.
    pub fn remove_all(&mut self, ids: &[ProductId]) -> usize {
        let len_before = self.items.len();
        self.items.retain(|p| !ids.contains(&p.id));
        len_before - self.items.len()
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculate subtotal, shipping and total.
    pub fn pricing(&self, shipping: Money) -> Result<PriceSummary, CommerceError> {
        PriceSummary::for_items(&self.items, shipping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;
    use crate::money::Currency;

    fn product(id: u64, price: i64) -> Product {
        ProductDraft {
            name: Some(format!("Item {}", id)),
            price: Some(Money::idr(price)),
            ..Default::default()
        }
        .into_product(ProductId::new(id), None, Currency::IDR)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_add_same_product_twice_keeps_one() {
        let mut cart = Cart::new();
        let item = product(1, 100);

        cart.add(&item).unwrap();
        let second = cart.add(&item);

        assert_eq!(second, Err(CommerceError::AlreadyInCart("Item 1".to_string())));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_sold_out_product() {
        let mut cart = Cart::new();
        let mut item = product(1, 100);
        item.mark_sold();

        assert!(matches!(cart.add(&item), Err(CommerceError::SoldOut(_))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100)).unwrap();

        assert!(!cart.remove(ProductId::new(2)));
        assert_eq!(cart.len(), 1);
        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_all() {
        let mut cart = Cart::new();
        for id in 1..=3 {
            cart.add(&product(id, 100)).unwrap();
        }
        let removed = cart.remove_all(&[ProductId::new(1), ProductId::new(3), ProductId::new(9)]);
        assert_eq!(removed, 2);
        assert_eq!(cart.items()[0].id, ProductId::new(2));
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100)).unwrap();
        cart.add(&product(2, 200)).unwrap();

        let pricing = cart.pricing(Money::idr(25)).unwrap();
        assert_eq!(pricing.subtotal.amount, 300);
        assert_eq!(pricing.total.amount, 325);
        assert_eq!(pricing.item_count, 2);
    }

    #[test]
    fn test_serializes_as_product_list() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100)).unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());

        let restored: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_from_items_drops_duplicates() {
        let cart = Cart::from_items(vec![product(1, 100), product(1, 100), product(2, 5)]);
        assert_eq!(cart.len(), 2);
    }
}
