//! Commerce error types.
//!
//! Every variant is a user-facing validation outcome. An operation that
//! returns one of these has left its state untouched.

use thiserror::Error;

use crate::checkout::OrderStatus;
use crate::ids::{CategoryId, OrderId, ProductId};
use crate::money::Currency;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The product is already in the cart. Every item is a single piece.
    #[error("{0} is already in your cart")]
    AlreadyInCart(String),

    /// The product has been sold.
    #[error("{0} is sold out")]
    SoldOut(String),

    /// Checkout started or submitted with no items.
    #[error("Checkout has no items")]
    EmptyCheckout,

    /// Required customer fields are missing.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// A category with the same name (case-insensitive) exists.
    #[error("A category named \"{0}\" already exists")]
    DuplicateCategory(String),

    /// The category is still referenced by products.
    #[error("Category \"{name}\" is still used by {products} product(s)")]
    CategoryInUse { name: String, products: usize },

    /// Category form is missing a name or image.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Status change not allowed by the active policy.
    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        order_id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// A price is not in the store currency.
    #[error("Price in {found} does not match store currency {expected}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Short machine-readable code, used for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            CommerceError::ProductNotFound(_) => "product_not_found",
            CommerceError::CategoryNotFound(_) => "category_not_found",
            CommerceError::OrderNotFound(_) => "order_not_found",
            CommerceError::AlreadyInCart(_) => "already_in_cart",
            CommerceError::SoldOut(_) => "sold_out",
            CommerceError::EmptyCheckout => "empty_checkout",
            CommerceError::CheckoutIncomplete(_) => "checkout_incomplete",
            CommerceError::DuplicateCategory(_) => "duplicate_category",
            CommerceError::CategoryInUse { .. } => "category_in_use",
            CommerceError::InvalidCategory(_) => "invalid_category",
            CommerceError::InvalidStatusTransition { .. } => "invalid_status_transition",
            CommerceError::CurrencyMismatch { .. } => "currency_mismatch",
            CommerceError::Overflow => "overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CommerceError::CategoryInUse {
            name: "Jaket".to_string(),
            products: 3,
        };
        assert_eq!(err.to_string(), "Category \"Jaket\" is still used by 3 product(s)");
        assert_eq!(err.code(), "category_in_use");

        let err = CommerceError::InvalidStatusTransition {
            order_id: OrderId::new("RTV-1001"),
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
        };
        assert_eq!(
            err.to_string(),
            "Order RTV-1001 cannot move from Pending to Delivered"
        );

        let err = CommerceError::CurrencyMismatch {
            expected: Currency::IDR,
            found: Currency::USD,
        };
        assert_eq!(err.to_string(), "Price in USD does not match store currency IDR");
        assert_eq!(err.code(), "currency_mismatch");
    }
}
