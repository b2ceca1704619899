//! Cart and checkout pricing calculations.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a set of items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceSummary {
    /// Number of pieces.
    pub item_count: usize,
    /// Sum of item prices.
    pub subtotal: Money,
    /// Flat shipping surcharge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

impl PriceSummary {
    /// Price a list of items with a flat shipping surcharge.
    ///
    /// Shipping is charged once regardless of item count. Returns an error on
    /// overflow or when an item is priced in a different currency.
    pub fn for_items(items: &[Product], shipping: Money) -> Result<Self, CommerceError> {
        if let Some(item) = items.iter().find(|p| p.price.currency != shipping.currency) {
            return Err(CommerceError::CurrencyMismatch {
                expected: shipping.currency,
                found: item.price.currency,
            });
        }

        let subtotal = Money::try_sum(items.iter().map(|p| &p.price), shipping.currency)
            .ok_or(CommerceError::Overflow)?;
        let total = subtotal.try_add(&shipping).ok_or(CommerceError::Overflow)?;

        Ok(Self {
            item_count: items.len(),
            subtotal,
            shipping,
            total,
        })
    }
}
