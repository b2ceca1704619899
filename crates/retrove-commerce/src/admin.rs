//! Admin dashboard figures.

use crate::catalog::Catalog;
use crate::checkout::{OrderBook, OrderStatus};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    /// Sum of totals of every order past `Pending`.
    pub revenue: Money,
    pub order_count: usize,
    pub product_count: usize,
    pub in_stock_count: usize,
    pub pending_count: usize,
}

impl DashboardStats {
    /// Compute the dashboard figures.
    pub fn compute(
        catalog: &Catalog,
        orders: &OrderBook,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let revenue = Money::try_sum(
            orders
                .orders()
                .iter()
                .filter(|o| o.is_paid())
                .map(|o| &o.total),
            currency,
        )
        .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            revenue,
            order_count: orders.len(),
            product_count: catalog.products().len(),
            in_stock_count: catalog.in_stock_count(),
            pending_count: orders.with_status(OrderStatus::Pending).count(),
        })
    }
}
