//! Order types.

use crate::cart::PriceSummary;
use crate::catalog::Product;
use crate::checkout::CustomerDetails;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::{Currency, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status, in fulfilment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting payment.
    #[default]
    Pending,
    /// Payment confirmed.
    Paid,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer.
    Delivered,
}

impl OrderStatus {
    /// Every status, in order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Position in the status sequence (0-indexed).
    pub fn index(&self) -> usize {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Paid => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::Delivered => 3,
        }
    }

    /// The status that follows this one, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        OrderStatus::ALL.get(self.index() + 1).copied()
    }

    /// Timeline for tracking display: every status up to this one is complete.
    pub fn timeline(&self) -> Vec<TimelineStep> {
        OrderStatus::ALL
            .iter()
            .map(|status| TimelineStep {
                status: *status,
                completed: status.index() <= self.index(),
                current: status == self,
            })
            .collect()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One step of an order tracking timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineStep {
    pub status: OrderStatus,
    pub completed: bool,
    pub current: bool,
}

/// Which status changes an administrator may make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Any status may be set from any other.
    #[default]
    Free,
    /// Only one step forward along Pending, Paid, Shipped, Delivered.
    Strict,
}

impl StatusPolicy {
    /// Check if moving from `from` to `to` is allowed.
    ///
    /// Setting the current status again is always allowed.
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        if from == to {
            return true;
        }
        match self {
            StatusPolicy::Free => true,
            StatusPolicy::Strict => from.next() == Some(to),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "free" => Some(StatusPolicy::Free),
            "strict" => Some(StatusPolicy::Strict),
            _ => None,
        }
    }
}

/// A placed order.
///
/// `items` are snapshots taken when the order was placed; later catalog
/// edits never touch them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order identifier (e.g., "RTV-1001").
    pub id: OrderId,
    /// Customer name.
    pub customer_name: String,
    /// Customer email.
    pub email: String,
    /// Shipping address.
    pub address: String,
    /// Calendar day the order was placed.
    pub date: NaiveDate,
    /// Item prices plus shipping.
    pub total: Money,
    /// Order status.
    pub status: OrderStatus,
    /// Purchased products.
    pub items: Vec<Product>,
}

impl Order {
    /// Build a new pending order from checkout data.
    pub fn place(
        id: OrderId,
        customer: &CustomerDetails,
        items: Vec<Product>,
        shipping: Money,
        date: NaiveDate,
    ) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCheckout);
        }
        customer.validate()?;
        let summary = PriceSummary::for_items(&items, shipping)?;

        Ok(Self {
            id,
            customer_name: customer.name.trim().to_string(),
            email: customer.email.trim().to_string(),
            address: customer.one_line_address(),
            date,
            total: summary.total,
            status: OrderStatus::Pending,
            items,
        })
    }

    /// IDs of the purchased products.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    /// Sum of item prices, without shipping.
    pub fn subtotal(&self) -> Option<Money> {
        Money::try_sum(self.items.iter().map(|p| &p.price), self.currency())
    }

    /// Currency the order was charged in.
    pub fn currency(&self) -> Currency {
        self.total.currency
    }

    /// Get item count.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the order counts towards revenue.
    pub fn is_paid(&self) -> bool {
        self.status != OrderStatus::Pending
    }
}

/// All orders, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Next sequential order ID: `base` plus the current order count.
    pub fn next_id(&self, prefix: &str, base: u64) -> OrderId {
        OrderId::sequential(prefix, base + self.orders.len() as u64)
    }

    /// Get an order by exact ID.
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Look up an order from user input, ignoring case and surrounding spaces.
    pub fn find(&self, input: &str) -> Result<&Order, CommerceError> {
        self.orders
            .iter()
            .find(|o| o.id.matches_input(input))
            .ok_or_else(|| CommerceError::OrderNotFound(input.trim().to_string()))
    }

    /// Store a new order.
    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Change an order's status. Returns the previous status.
    pub fn set_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
        policy: StatusPolicy,
    ) -> Result<OrderStatus, CommerceError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;

        let previous = order.status;
        if !policy.allows(previous, status) {
            return Err(CommerceError::InvalidStatusTransition {
                order_id: id.clone(),
                from: previous,
                to: status,
            });
        }
        order.status = status;
        Ok(previous)
    }

    /// Orders with a given status.
    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.status == status)
    }
}
