//! The storefront state container.

use chrono::{NaiveDate, Utc};
use retrove_commerce::cart::Cart;
use retrove_commerce::catalog::{Catalog, Product};
use retrove_commerce::checkout::{Checkout, CustomerDetails, Order, OrderBook};
use retrove_commerce::ids::{OrderId, ProductId};
use retrove_commerce::search::Listing;
use retrove_commerce::{CommerceError, Money};
use tracing::{debug, info, instrument, warn};

use crate::command::{Command, Event};
use crate::config::StorefrontConfig;
use crate::navigation::{AdminPage, Navigation, Page};
use crate::persist::CartPersistence;
use crate::seed;

/// All storefront state: catalog, orders, cart, checkout and navigation.
///
/// State is only changed through [`Storefront::apply`]. Reads go through
/// the accessors here and the view functions in [`crate::views`].
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    orders: OrderBook,
    cart: Cart,
    checkout: Option<Checkout>,
    nav: Navigation,
    last_order_id: Option<OrderId>,
    persistence: Option<CartPersistence>,
    today: Option<NaiveDate>,
}

impl Storefront {
    /// Create a storefront with the seed catalog and order history.
    pub fn new(config: StorefrontConfig) -> Self {
        let (catalog, orders) = seed::seed(config.catalog.seed, config.currency());
        Self::from_parts(config, catalog, orders)
    }

    /// Create a storefront from an explicit catalog and order history.
    pub fn from_parts(config: StorefrontConfig, catalog: Catalog, orders: OrderBook) -> Self {
        info!(
            products = catalog.products().len(),
            categories = catalog.categories().len(),
            orders = orders.len(),
            "Storefront ready"
        );
        Self {
            config,
            catalog,
            orders,
            cart: Cart::new(),
            checkout: None,
            nav: Navigation::default(),
            last_order_id: None,
            persistence: None,
            today: None,
        }
    }

    /// Attach cart persistence and restore the stored cart.
    pub fn with_persistence(mut self, persistence: CartPersistence) -> Self {
        self.cart = persistence.load(self.config.currency());
        debug!(items = self.cart.len(), key = persistence.key(), "Restored cart");
        self.persistence = Some(persistence);
        self
    }

    /// Pin the date stamped on new orders.
    pub fn with_today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Items waiting at checkout, if a checkout is in progress.
    pub fn checkout(&self) -> Option<&Checkout> {
        self.checkout.as_ref()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    pub fn last_order_id(&self) -> Option<&OrderId> {
        self.last_order_id.as_ref()
    }

    /// Flat shipping surcharge per order.
    pub fn shipping(&self) -> Money {
        self.config.shipping()
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    fn product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.catalog
            .product(id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Apply a command.
    ///
    /// On error nothing has changed.
    #[instrument(skip_all, fields(command = command.name()))]
    pub fn apply(&mut self, command: Command) -> Result<Event, CommerceError> {
        let result = self.dispatch(command);
        match &result {
            Ok(event) => debug!(?event, "Command applied"),
            Err(e) => warn!(code = e.code(), error = %e, "Command rejected"),
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<Event, CommerceError> {
        match command {
            Command::GoHome => Ok(self.navigate(Page::Home)),
            Command::SelectListing(listing) => {
                if let Listing::Category(id) = listing {
                    if self.catalog.category(id).is_none() {
                        return Err(CommerceError::CategoryNotFound(id));
                    }
                }
                Ok(self.navigate(Page::ProductList(listing)))
            }
            Command::SelectProduct(id) => {
                self.product(id)?;
                Ok(self.navigate(Page::ProductDetail(id)))
            }
            Command::BackToListing => {
                let listing = match self.nav.page {
                    Page::ProductDetail(id) => self
                        .catalog
                        .product(id)
                        .and_then(|p| p.category_id)
                        .map(Listing::Category)
                        .unwrap_or(Listing::All),
                    _ => Listing::All,
                };
                Ok(self.navigate(Page::ProductList(listing)))
            }
            Command::ViewCart => Ok(self.navigate(Page::Cart)),
            Command::ViewStaticPage(page) => Ok(self.navigate(Page::Static(page))),
            Command::OpenQuickView(id) => {
                self.product(id)?;
                self.nav.quick_view = Some(id);
                Ok(Event::QuickViewOpened(id))
            }
            Command::CloseQuickView => {
                self.nav.quick_view = None;
                Ok(Event::QuickViewClosed)
            }
            Command::ViewFullDetails => match self.nav.quick_view {
                Some(id) => {
                    self.product(id)?;
                    self.nav.quick_view = None;
                    Ok(self.navigate(Page::ProductDetail(id)))
                }
                None => Ok(Event::Navigated(self.nav.page)),
            },
            Command::OpenTrackOrder => {
                self.nav.track_order_open = true;
                Ok(Event::TrackOrderOpened)
            }
            Command::CloseTrackOrder => {
                self.nav.track_order_open = false;
                Ok(Event::TrackOrderClosed)
            }
            Command::EnterAdmin => {
                self.nav.admin = Some(AdminPage::Dashboard);
                Ok(Event::AdminOpened(AdminPage::Dashboard))
            }
            Command::ExitAdmin => {
                self.nav.admin = None;
                Ok(Event::AdminClosed)
            }
            Command::SelectAdminPage(page) => {
                self.nav.admin = Some(page);
                Ok(Event::AdminOpened(page))
            }

            Command::AddToCart(id) => self.add_to_cart(id),
            Command::RemoveFromCart(id) => {
                let removed = self.cart.remove(id);
                if removed {
                    self.persist_cart();
                }
                Ok(Event::RemovedFromCart {
                    product_id: id,
                    removed,
                })
            }

            Command::CheckoutCart => {
                let checkout = Checkout::from_cart(&self.cart)?;
                self.begin_checkout(checkout)
            }
            Command::BuyNow(id) => {
                let checkout = Checkout::buy_now(self.product(id)?)?;
                self.begin_checkout(checkout)
            }
            Command::PlaceOrder(details) => self.place_order(&details),

            Command::AddProduct(draft) => {
                let currency = self.config.currency();
                let id = self.catalog.add_product(draft, currency)?.id;
                info!(product_id = %id, "Product added");
                Ok(Event::ProductAdded(id))
            }
            Command::UpdateProduct(product) => {
                let id = product.id;
                let currency = self.config.currency();
                if product.price.currency != currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: currency,
                        found: product.price.currency,
                    });
                }
                self.catalog.update_product(product)?;
                info!(product_id = %id, "Product updated");
                Ok(Event::ProductUpdated(id))
            }
            Command::DeleteProduct(id) => {
                let removed = self.catalog.delete_product(id).is_some();
                if self.nav.quick_view == Some(id) {
                    self.nav.quick_view = None;
                }
                info!(product_id = %id, removed, "Product deleted");
                Ok(Event::ProductDeleted {
                    product_id: id,
                    removed,
                })
            }
            Command::AddCategory(draft) => {
                let category = self.catalog.add_category(draft)?;
                info!(category_id = %category.id, name = %category.name, "Category added");
                Ok(Event::CategoryAdded(category.id))
            }
            Command::UpdateCategory { id, draft } => {
                self.catalog.update_category(id, draft)?;
                info!(category_id = %id, "Category updated");
                Ok(Event::CategoryUpdated(id))
            }
            Command::DeleteCategory(id) => {
                let category = self.catalog.delete_category(id)?;
                if self.nav.page == Page::ProductList(Listing::Category(id)) {
                    self.nav.go(Page::Home);
                }
                info!(category_id = %id, name = %category.name, "Category deleted");
                Ok(Event::CategoryDeleted(id))
            }
            Command::UpdateOrderStatus { order_id, status } => {
                let policy = self.config.checkout.status_policy;
                let from = self.orders.set_status(&order_id, status, policy)?;
                info!(order_id = %order_id, %from, to = %status, "Order status updated");
                Ok(Event::OrderStatusUpdated {
                    order_id,
                    from,
                    to: status,
                })
            }
        }
    }

    fn navigate(&mut self, page: Page) -> Event {
        self.nav.go(page);
        Event::Navigated(page)
    }

    fn add_to_cart(&mut self, id: ProductId) -> Result<Event, CommerceError> {
        let product = self
            .catalog
            .product(id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        self.cart.add(product)?;
        let name = product.name.clone();
        info!(product_id = %id, cart_items = self.cart.len(), "Added to cart");

        self.persist_cart();
        Ok(Event::AddedToCart {
            product_id: id,
            name,
        })
    }

    fn begin_checkout(&mut self, checkout: Checkout) -> Result<Event, CommerceError> {
        let summary = checkout.summary(self.shipping())?;
        info!(items = summary.item_count, total = %summary.total, "Checkout started");

        self.checkout = Some(checkout);
        self.nav.go(Page::Checkout);
        Ok(Event::CheckoutStarted {
            item_count: summary.item_count,
            total: summary.total,
        })
    }

    fn place_order(&mut self, details: &CustomerDetails) -> Result<Event, CommerceError> {
        let checkout = self.checkout.as_ref().ok_or(CommerceError::EmptyCheckout)?;

        let order_id = self
            .orders
            .next_id(&self.config.checkout.order_prefix, self.config.checkout.order_base);
        let order = Order::place(
            order_id.clone(),
            details,
            checkout.items().to_vec(),
            self.shipping(),
            self.today(),
        )?;
        checkout.ensure_available(&self.catalog)?;

        // Everything below is infallible.
        let ids = order.product_ids();
        let total = order.total;
        self.catalog.mark_sold(&ids);
        if self.cart.remove_all(&ids) > 0 {
            self.persist_cart();
        }
        self.orders.push(order);
        self.last_order_id = Some(order_id.clone());
        self.checkout = None;
        self.nav.go(Page::OrderConfirmation);

        info!(order_id = %order_id, total = %total, items = ids.len(), "Order placed");
        Ok(Event::OrderPlaced { order_id, total })
    }

    fn persist_cart(&mut self) {
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save(&self.cart);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::StaticPage;
    use retrove_commerce::catalog::{Category, CategoryDraft, ProductDraft};
    use retrove_commerce::checkout::OrderStatus;
    use retrove_commerce::ids::CategoryId;

    fn storefront() -> Storefront {
        Storefront::new(StorefrontConfig::default())
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_navigation_commands() {
        let mut store = storefront();
        store
            .apply(Command::SelectListing(Listing::NewArrivals))
            .unwrap();
        assert_eq!(store.navigation().page, Page::ProductList(Listing::NewArrivals));

        store.apply(Command::SelectProduct(ProductId::new(2))).unwrap();
        let event = store.apply(Command::BackToListing).unwrap();
        assert_eq!(
            event,
            Event::Navigated(Page::ProductList(Listing::Category(CategoryId::new(2))))
        );

        store
            .apply(Command::ViewStaticPage(StaticPage::Sizing))
            .unwrap();
        assert_eq!(store.navigation().page, Page::Static(StaticPage::Sizing));
    }

    #[test]
    fn test_unknown_product_leaves_page() {
        let mut store = storefront();
        let err = store
            .apply(Command::SelectProduct(ProductId::new(999)))
            .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound(ProductId::new(999)));
        assert_eq!(store.navigation().page, Page::Home);
    }

    #[test]
    fn test_quick_view_to_details() {
        let mut store = storefront();
        store.apply(Command::OpenQuickView(ProductId::new(5))).unwrap();
        assert_eq!(store.navigation().quick_view, Some(ProductId::new(5)));

        store.apply(Command::ViewFullDetails).unwrap();
        assert_eq!(store.navigation().quick_view, None);
        assert_eq!(store.navigation().page, Page::ProductDetail(ProductId::new(5)));
    }

    #[test]
    fn test_admin_toggle_keeps_storefront_page() {
        let mut store = storefront();
        store.apply(Command::ViewCart).unwrap();
        store.apply(Command::EnterAdmin).unwrap();
        store
            .apply(Command::SelectAdminPage(AdminPage::Orders))
            .unwrap();
        assert_eq!(store.navigation().admin, Some(AdminPage::Orders));

        store.apply(Command::ExitAdmin).unwrap();
        assert!(!store.navigation().is_admin());
        assert_eq!(store.navigation().page, Page::Cart);
    }

    #[test]
    fn test_place_order_without_checkout() {
        let mut store = storefront();
        let details = CustomerDetails::new("Rina", "rina@example.com", "Jl. Kenanga 3");
        assert_eq!(
            store.apply(Command::PlaceOrder(details)).unwrap_err(),
            CommerceError::EmptyCheckout
        );
    }

    #[test]
    fn test_incomplete_details_keep_checkout() {
        let mut store = storefront();
        store.apply(Command::BuyNow(ProductId::new(1))).unwrap();

        let details = CustomerDetails::new("Rina", "", "Jl. Kenanga 3");
        let err = store.apply(Command::PlaceOrder(details)).unwrap_err();
        assert_eq!(err, CommerceError::CheckoutIncomplete("email".to_string()));
        assert!(store.checkout().is_some());
        assert_eq!(store.orders().len(), 4);
        assert!(store.catalog().product(ProductId::new(1)).unwrap().in_stock);
    }

    #[test]
    fn test_order_uses_pinned_date_and_config() {
        let mut config = StorefrontConfig::default();
        config.checkout.order_prefix = "TST".to_string();
        config.checkout.order_base = 1;
        config.checkout.shipping_surcharge = 0;

        let jaket = Category::new(CategoryId::new(1), "Jaket", "img");
        let mut store = Storefront::from_parts(config, Catalog::new(Vec::new(), vec![jaket]), OrderBook::default())
            .with_today(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());

        store
            .apply(Command::AddProduct(ProductDraft {
                price: Some(Money::idr(1_000)),
                ..Default::default()
            }))
            .unwrap();
        store.apply(Command::BuyNow(ProductId::new(1))).unwrap();
        let event = store
            .apply(Command::PlaceOrder(CustomerDetails::new("A", "a@b.c", "Jl. 1")))
            .unwrap();

        assert_eq!(
            event,
            Event::OrderPlaced {
                order_id: OrderId::new("TST-1"),
                total: Money::idr(1_000),
            }
        );
        let order = store.orders().get(&OrderId::new("TST-1")).unwrap();
        assert_eq!(order.date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_unpinned_order_date_is_utc_day() {
        let mut store = Storefront::new(StorefrontConfig::default());
        let before = Utc::now().date_naive();
        store.apply(Command::BuyNow(ProductId::new(1))).unwrap();
        let event = store
            .apply(Command::PlaceOrder(CustomerDetails::new("A", "a@b.c", "Jl. 1")))
            .unwrap();
        let after = Utc::now().date_naive();

        let order_id = match event {
            Event::OrderPlaced { order_id, .. } => order_id,
            other => panic!("expected OrderPlaced, got {:?}", other),
        };
        let date = store.orders().get(&order_id).unwrap().date;
        assert!(before <= date && date <= after);
    }

    #[test]
    fn test_deleting_viewed_category_goes_home() {
        let mut store = storefront();
        store
            .apply(Command::AddCategory(CategoryDraft::new("Vintage Tees", "img")))
            .unwrap();
        let id = store.catalog().category_by_name("vintage tees").unwrap().id;

        store
            .apply(Command::SelectListing(Listing::Category(id)))
            .unwrap();
        store.apply(Command::DeleteCategory(id)).unwrap();
        assert_eq!(store.navigation().page, Page::Home);
    }
}
