//! Commands the storefront accepts and the events they produce.
//!
//! Every state change goes through a [`Command`]. A command either commits
//! fully and yields an [`Event`], or is rejected with a
//! [`retrove_commerce::CommerceError`] and leaves the state untouched.

use retrove_commerce::catalog::{CategoryDraft, Product, ProductDraft};
use retrove_commerce::checkout::{CustomerDetails, OrderStatus};
use retrove_commerce::ids::{CategoryId, OrderId, ProductId};
use retrove_commerce::search::Listing;
use retrove_commerce::Money;
use serde::{Deserialize, Serialize};

use crate::navigation::{AdminPage, Page, StaticPage};

/// A request to change storefront state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    // Navigation
    GoHome,
    SelectListing(Listing),
    SelectProduct(ProductId),
    /// Leave a product page for its category listing.
    BackToListing,
    ViewCart,
    ViewStaticPage(StaticPage),
    OpenQuickView(ProductId),
    CloseQuickView,
    /// Close the quick view and open the full product page.
    ViewFullDetails,
    OpenTrackOrder,
    CloseTrackOrder,
    EnterAdmin,
    ExitAdmin,
    SelectAdminPage(AdminPage),

    // Cart
    AddToCart(ProductId),
    RemoveFromCart(ProductId),

    // Checkout
    /// Check out everything in the cart.
    CheckoutCart,
    /// Check out a single product, skipping the cart.
    BuyNow(ProductId),
    PlaceOrder(CustomerDetails),

    // Admin
    AddProduct(ProductDraft),
    UpdateProduct(Product),
    DeleteProduct(ProductId),
    AddCategory(CategoryDraft),
    UpdateCategory {
        id: CategoryId,
        draft: CategoryDraft,
    },
    DeleteCategory(CategoryId),
    UpdateOrderStatus {
        order_id: OrderId,
        status: OrderStatus,
    },
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GoHome => "go_home",
            Command::SelectListing(_) => "select_listing",
            Command::SelectProduct(_) => "select_product",
            Command::BackToListing => "back_to_listing",
            Command::ViewCart => "view_cart",
            Command::ViewStaticPage(_) => "view_static_page",
            Command::OpenQuickView(_) => "open_quick_view",
            Command::CloseQuickView => "close_quick_view",
            Command::ViewFullDetails => "view_full_details",
            Command::OpenTrackOrder => "open_track_order",
            Command::CloseTrackOrder => "close_track_order",
            Command::EnterAdmin => "enter_admin",
            Command::ExitAdmin => "exit_admin",
            Command::SelectAdminPage(_) => "select_admin_page",
            Command::AddToCart(_) => "add_to_cart",
            Command::RemoveFromCart(_) => "remove_from_cart",
            Command::CheckoutCart => "checkout_cart",
            Command::BuyNow(_) => "buy_now",
            Command::PlaceOrder(_) => "place_order",
            Command::AddProduct(_) => "add_product",
            Command::UpdateProduct(_) => "update_product",
            Command::DeleteProduct(_) => "delete_product",
            Command::AddCategory(_) => "add_category",
            Command::UpdateCategory { .. } => "update_category",
            Command::DeleteCategory(_) => "delete_category",
            Command::UpdateOrderStatus { .. } => "update_order_status",
        }
    }
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Navigated(Page),
    AdminOpened(AdminPage),
    AdminClosed,
    QuickViewOpened(ProductId),
    QuickViewClosed,
    TrackOrderOpened,
    TrackOrderClosed,

    AddedToCart {
        product_id: ProductId,
        name: String,
    },
    /// `removed` is false when the product was not in the cart.
    RemovedFromCart {
        product_id: ProductId,
        removed: bool,
    },

    CheckoutStarted {
        item_count: usize,
        total: Money,
    },
    OrderPlaced {
        order_id: OrderId,
        total: Money,
    },

    ProductAdded(ProductId),
    ProductUpdated(ProductId),
    /// `removed` is false when no product had the ID.
    ProductDeleted {
        product_id: ProductId,
        removed: bool,
    },
    CategoryAdded(CategoryId),
    CategoryUpdated(CategoryId),
    CategoryDeleted(CategoryId),
    OrderStatusUpdated {
        order_id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl Event {
    /// Shopper-facing notice, for events that show one.
    pub fn notice(&self) -> Option<String> {
        match self {
            Event::AddedToCart { name, .. } => {
                Some(format!("{} added to cart", name))
            }
            Event::OrderPlaced { order_id, total } => Some(format!(
                "Order {} placed, total {}",
                order_id,
                total.display()
            )),
            _ => None,
        }
    }
}
