//! Read-only projections of storefront state.
//!
//! Each view is a pure function of [`Storefront`]; renderers (the CLI, or
//! anything else) only ever see these.

use retrove_commerce::admin::DashboardStats;
use retrove_commerce::cart::PriceSummary;
use retrove_commerce::catalog::{Category, Product};
use retrove_commerce::checkout::{CheckoutSource, Order, TimelineStep};
use retrove_commerce::ids::{OrderId, ProductId};
use retrove_commerce::search::{Listing, ProductQuery, SearchResults, HOME_FEATURED_LIMIT};
use retrove_commerce::CommerceError;
use serde::Serialize;

use crate::navigation::{AdminPage, Page, StaticPage};
use crate::state::Storefront;

/// How many related products a product page shows.
pub const RELATED_LIMIT: usize = 4;

#[derive(Debug, Serialize)]
pub struct HomeView<'a> {
    pub store_name: &'a str,
    /// Newest products.
    pub new_arrivals: Vec<&'a Product>,
    pub categories: &'a [Category],
}

#[derive(Debug, Serialize)]
pub struct ListingView<'a> {
    pub listing: Listing,
    pub title: String,
    pub results: SearchResults<&'a Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductView<'a> {
    pub product: &'a Product,
    pub category_name: &'a str,
    pub in_cart: bool,
    pub related: Vec<&'a Product>,
}

#[derive(Debug, Serialize)]
pub struct CartView<'a> {
    pub items: &'a [Product],
    pub summary: PriceSummary,
}

#[derive(Debug, Serialize)]
pub struct CheckoutView<'a> {
    pub items: &'a [Product],
    pub source: CheckoutSource,
    pub summary: PriceSummary,
}

#[derive(Debug, Serialize)]
pub struct ConfirmationView<'a> {
    pub order_id: &'a OrderId,
    /// Empty when the order can no longer be found.
    pub items: &'a [Product],
}

#[derive(Debug, Serialize)]
pub struct TrackingView<'a> {
    pub order: &'a Order,
    pub timeline: Vec<TimelineStep>,
}

/// A category with the number of products using it.
#[derive(Debug, Serialize)]
pub struct CategoryUsage<'a> {
    pub category: &'a Category,
    pub products: usize,
}

/// The admin console section currently open.
#[derive(Debug, Serialize)]
pub enum AdminView<'a> {
    Dashboard(DashboardStats),
    Products(&'a [Product]),
    Orders(&'a [Order]),
    Categories(Vec<CategoryUsage<'a>>),
}

/// Whatever the navigation state says is on screen.
#[derive(Debug, Serialize)]
pub enum View<'a> {
    Home(HomeView<'a>),
    ProductList(ListingView<'a>),
    /// `None` when the product has been deleted.
    ProductDetail(Option<ProductView<'a>>),
    Cart(CartView<'a>),
    /// `None` when no checkout is in progress.
    Checkout(Option<CheckoutView<'a>>),
    /// `None` when no order has been placed.
    OrderConfirmation(Option<ConfirmationView<'a>>),
    Static(StaticPage),
    Admin(AdminView<'a>),
}

impl Storefront {
    /// The current screen.
    pub fn current_view(&self) -> Result<View<'_>, CommerceError> {
        if let Some(page) = self.navigation().admin {
            return Ok(View::Admin(self.admin_view(page)?));
        }

        Ok(match self.navigation().page {
            Page::Home => View::Home(self.home_view()),
            Page::ProductList(listing) => {
                View::ProductList(self.listing_view(&ProductQuery::new(listing)))
            }
            Page::ProductDetail(id) => View::ProductDetail(self.product_view(id)),
            Page::Cart => View::Cart(self.cart_view()?),
            Page::Checkout => View::Checkout(self.checkout_view()?),
            Page::OrderConfirmation => View::OrderConfirmation(self.confirmation_view()),
            Page::Static(page) => View::Static(page),
        })
    }

    pub fn home_view(&self) -> HomeView<'_> {
        HomeView {
            store_name: &self.config().store.name,
            new_arrivals: self.catalog().newest(HOME_FEATURED_LIMIT),
            categories: self.catalog().categories(),
        }
    }

    pub fn listing_view(&self, query: &ProductQuery) -> ListingView<'_> {
        ListingView {
            listing: query.listing,
            title: query.listing.title(self.catalog()),
            results: query.run(self.catalog(), self.config().catalog.new_arrivals),
        }
    }

    pub fn product_view(&self, id: ProductId) -> Option<ProductView<'_>> {
        let product = self.catalog().product(id)?;
        Some(ProductView {
            product,
            category_name: self.catalog().category_name(product.category_id),
            in_cart: self.cart().contains(id),
            related: self.catalog().related(product, RELATED_LIMIT),
        })
    }

    pub fn cart_view(&self) -> Result<CartView<'_>, CommerceError> {
        Ok(CartView {
            items: self.cart().items(),
            summary: self.cart().pricing(self.shipping())?,
        })
    }

    pub fn checkout_view(&self) -> Result<Option<CheckoutView<'_>>, CommerceError> {
        let Some(checkout) = self.checkout() else {
            return Ok(None);
        };
        Ok(Some(CheckoutView {
            items: checkout.items(),
            source: checkout.source(),
            summary: checkout.summary(self.shipping())?,
        }))
    }

    pub fn confirmation_view(&self) -> Option<ConfirmationView<'_>> {
        let order_id = self.last_order_id()?;
        let items = self
            .orders()
            .get(order_id)
            .map(|o| o.items.as_slice())
            .unwrap_or(&[]);
        Some(ConfirmationView { order_id, items })
    }

    /// Look up an order from free-form input (trimmed, case-insensitive).
    pub fn track_order(&self, input: &str) -> Result<TrackingView<'_>, CommerceError> {
        let order = self.orders().find(input)?;
        Ok(TrackingView {
            order,
            timeline: order.status.timeline(),
        })
    }

    pub fn dashboard(&self) -> Result<DashboardStats, CommerceError> {
        DashboardStats::compute(self.catalog(), self.orders(), self.config().currency())
    }

    pub fn admin_view(&self, page: AdminPage) -> Result<AdminView<'_>, CommerceError> {
        Ok(match page {
            AdminPage::Dashboard => AdminView::Dashboard(self.dashboard()?),
            AdminPage::Products => AdminView::Products(self.catalog().products()),
            AdminPage::Orders => AdminView::Orders(self.orders().orders()),
            AdminPage::Categories => AdminView::Categories(
                self.catalog()
                    .categories()
                    .iter()
                    .map(|category| CategoryUsage {
                        category,
                        products: self.catalog().product_count(category.id),
                    })
                    .collect(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::config::StorefrontConfig;
    use retrove_commerce::checkout::OrderStatus;
    use retrove_commerce::Money;

    fn storefront() -> Storefront {
        Storefront::new(StorefrontConfig::default())
    }

    #[test]
    fn test_home_shows_four_newest() {
        let store = storefront();
        let home = store.home_view();
        let ids: Vec<u64> = home.new_arrivals.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![100, 99, 98, 97]);
        assert_eq!(home.categories.len(), 6);
    }

    #[test]
    fn test_product_view_related() {
        let store = storefront();
        let view = store.product_view(ProductId::new(1)).unwrap();
        assert_eq!(view.category_name, "Jaket");
        assert!(view.related.len() <= RELATED_LIMIT);
        for related in &view.related {
            assert_eq!(related.category_id, view.product.category_id);
            assert_ne!(related.id, view.product.id);
            assert!(related.in_stock);
        }
        assert!(store.product_view(ProductId::new(1000)).is_none());
    }

    #[test]
    fn test_tracking_view() {
        let store = storefront();
        let view = store.track_order("  rtv-1001 ").unwrap();
        assert_eq!(view.order.status, OrderStatus::Shipped);
        let completed: Vec<bool> = view.timeline.iter().map(|s| s.completed).collect();
        assert_eq!(completed, vec![true, true, true, false]);

        assert!(matches!(
            store.track_order("RTV-9999"),
            Err(CommerceError::OrderNotFound(_))
        ));
    }

    #[test]
    fn test_dashboard_from_seed() {
        let store = storefront();
        let stats = store.dashboard().unwrap();
        assert_eq!(stats.revenue, Money::idr(670_000 + 205_000 + 405_000));
        assert_eq!(stats.revenue.display_thousands(), "Rp1280 K");
        assert_eq!(stats.order_count, 4);
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.product_count, 100);
    }

    #[test]
    fn test_current_view_follows_navigation() {
        let mut store = storefront();
        assert!(matches!(store.current_view().unwrap(), View::Home(_)));

        store.apply(Command::ViewCart).unwrap();
        match store.current_view().unwrap() {
            View::Cart(cart) => assert_eq!(cart.summary.item_count, 0),
            other => panic!("unexpected view {:?}", other),
        }

        store.apply(Command::EnterAdmin).unwrap();
        assert!(matches!(
            store.current_view().unwrap(),
            View::Admin(AdminView::Dashboard(_))
        ));
    }

    #[test]
    fn test_confirmation_after_order() {
        let mut store = storefront();
        assert!(store.confirmation_view().is_none());

        store.apply(Command::BuyNow(ProductId::new(2))).unwrap();
        store
            .apply(Command::PlaceOrder(
                retrove_commerce::checkout::CustomerDetails::new("Sari", "sari@example.com", "Jl. Melati 9"),
            ))
            .unwrap();

        let view = store.confirmation_view().unwrap();
        assert_eq!(view.order_id.as_str(), "RTV-1005");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, ProductId::new(2));
    }
}
